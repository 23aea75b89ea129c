//! Clothing catalog wiring.
//!
//! This module owns everything about the item inventory: the closed attribute
//! vocabularies, the `Item`/`Catalog` model, and the CSV-backed store. Callers
//! load a `Catalog` through `CatalogStore` and hold on to it for the life of a
//! session; there is no global catalog state.

pub mod attributes;
pub mod model;
pub mod store;

pub use attributes::{Category, Style, TemperatureBand, Weather};
pub use model::{Catalog, Item};
pub use store::{CATALOG_COLUMNS, CatalogError, CatalogLoad, CatalogStore, MalformedRecord};
