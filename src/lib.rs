//! Shared library for the outfit recommender CLI.
//!
//! The crate exposes the clothing catalog (attribute vocabularies, item
//! model, CSV store), the selection and outfit assembly logic, and the
//! interactive session loop that the `outfit` binary drives. Public functions
//! here form the contract the binary depends on: catalog location, loading,
//! and the session itself.

use std::env;
use std::path::PathBuf;

pub mod catalog;
pub mod outfit;
pub mod selector;
pub mod session;

pub use catalog::{
    CATALOG_COLUMNS, Catalog, CatalogError, CatalogLoad, CatalogStore, Category, Item,
    MalformedRecord, Style, TemperatureBand, Weather,
};
pub use outfit::{Conditions, Outfit, OutfitSlot, plan_outfit, render_outfit};
pub use selector::{Picker, RandomPicker, choose};
pub use session::run_session;

/// Environment variable naming the catalog file when no flag is given.
pub const CATALOG_ENV: &str = "OUTFIT_CATALOG";
/// Catalog file used when neither a flag nor the environment names one.
pub const DEFAULT_CATALOG_FILE: &str = "items.csv";

/// Locate the catalog file for this invocation.
///
/// Resolution order: an explicit flag override wins, then a non-empty
/// `OUTFIT_CATALOG`, then `items.csv` in the current directory. An empty
/// environment value is ignored rather than treated as a path.
pub fn resolve_catalog_path(override_path: Option<PathBuf>) -> PathBuf {
    if let Some(path) = override_path {
        return path;
    }
    if let Some(value) = env::var_os(CATALOG_ENV) {
        if !value.is_empty() {
            return PathBuf::from(value);
        }
    }
    PathBuf::from(DEFAULT_CATALOG_FILE)
}
