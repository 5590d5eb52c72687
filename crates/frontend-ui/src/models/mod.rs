//! Data models for static page content

pub mod page;

pub use page::PageElement;
