//! Product catalog loading.
//!
//! This crate reads the JSON product list that drives the storefront and
//! stamps each record with its 1-based position in the list.

pub mod item;
pub mod loader;

pub use item::{index_items, with_index, IndexedItem, Item};
pub use loader::{load_catalog, parse_catalog, CatalogError};
