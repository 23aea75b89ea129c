//! Item model and the in-memory catalog handle.
//!
//! `Item` mirrors one row of the catalog file; `Catalog` is the ordered
//! collection a session works against. Persistence lives in `CatalogStore`,
//! selection walks `Catalog::items` directly, and sessions keep the two in
//! step by appending to the store before touching the in-memory copy.

use crate::catalog::attributes::{Category, Style, TemperatureBand, Weather};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// One clothing article; field order matches the catalog file columns.
pub struct Item {
    pub category: Category,
    pub name: String,
    pub color: String,
    #[serde(rename = "temperature")]
    pub band: TemperatureBand,
    pub style: Style,
    pub weather: Weather,
}

impl Item {
    /// Whether this item satisfies a selection filter. Weather is recorded on
    /// items but never filtered on; it only gates whether a jacket is sought.
    pub fn matches(&self, category: Category, band: TemperatureBand, style: Style) -> bool {
        self.category == category && self.band == band && self.style == style
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.color)
    }
}

#[derive(Clone, Debug, Default)]
/// Ordered, append-only collection of items.
///
/// Items keep the order they appear in the catalog file, with additions at
/// the end; selection treats the collection as an unordered pool.
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Wrap items already read from the catalog file.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Append one item; existing entries are never reordered or removed.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
