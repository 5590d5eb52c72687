//! Behavioral tests for pages and routing
//!
//! BDD-style tests using given-when-then naming convention.
//! Tests focus on observable behavior rather than implementation details.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::indexing_slicing)]

mod navigation_behaviors;
