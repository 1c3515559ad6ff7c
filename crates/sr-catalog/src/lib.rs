//! Vehicle inventory catalog.
//!
//! Loads a JSON document mapping category names to ordered model lists and
//! answers case-insensitive lookups against it. A missing or malformed
//! document degrades to an empty catalog instead of failing startup.

pub mod catalog;
pub mod error;
pub mod sample;

pub use catalog::InventoryCatalog;
pub use error::{CatalogError, CatalogResult};
pub use sample::sample_inventory;
