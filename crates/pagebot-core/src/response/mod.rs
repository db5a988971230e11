//! Canned response generation.
//!
//! [`templates::generate`] is the stock intent -> text mapping;
//! [`ResponseCatalog`] is the per-widget copy that config can override.

pub mod catalog;
pub mod templates;

pub use catalog::ResponseCatalog;
pub use templates::generate;
