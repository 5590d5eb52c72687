//! Reusable UI components

pub mod page_element;

pub use page_element::PageBlock;
