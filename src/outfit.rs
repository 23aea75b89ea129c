//! Outfit assembly and report rendering.
//!
//! An outfit is one independent selection per wardrobe slot. The jacket slot
//! only exists when the weather calls for one (rain, or a cold reading);
//! every other slot is always requested. Slots that find nothing keep `None`
//! so the report shows the gap instead of dropping the line.

use crate::catalog::{Catalog, Category, Item, Style, TemperatureBand, Weather};
use crate::selector::{Picker, choose};
use std::fmt;

/// Today's inputs, as answered at the prompt.
#[derive(Clone, Copy, Debug)]
pub struct Conditions {
    pub temperature_c: i32,
    pub style: Style,
    pub weather: Weather,
}

impl Conditions {
    /// Whether today calls for a jacket at all.
    pub fn wants_jacket(&self) -> bool {
        self.weather == Weather::Rainy
            || TemperatureBand::from_celsius(self.temperature_c) == TemperatureBand::Cold
    }
}

/// One requested wardrobe slot and what selection found for it.
#[derive(Clone, Debug)]
pub struct OutfitSlot {
    pub category: Category,
    pub choice: Option<Item>,
}

/// Assembled outfit in report order: jacket first when requested, then
/// shirt, pants, shoes.
#[derive(Clone, Debug, Default)]
pub struct Outfit {
    slots: Vec<OutfitSlot>,
}

impl Outfit {
    pub fn slots(&self) -> &[OutfitSlot] {
        &self.slots
    }

    pub fn includes(&self, category: Category) -> bool {
        self.slots.iter().any(|slot| slot.category == category)
    }
}

/// Select one item per requested slot. Slots are filled independently, so a
/// miss in one never blocks the others.
pub fn plan_outfit(catalog: &Catalog, conditions: Conditions, picker: &mut dyn Picker) -> Outfit {
    let mut slots = Vec::with_capacity(4);
    if conditions.wants_jacket() {
        slots.push(slot_for(catalog, Category::Jacket, conditions, picker));
    }
    for category in [Category::Shirt, Category::Pants, Category::Shoes] {
        slots.push(slot_for(catalog, category, conditions, picker));
    }
    Outfit { slots }
}

fn slot_for(
    catalog: &Catalog,
    category: Category,
    conditions: Conditions,
    picker: &mut dyn Picker,
) -> OutfitSlot {
    let choice = choose(
        catalog,
        category,
        conditions.temperature_c,
        conditions.style,
        picker,
    )
    .cloned();
    OutfitSlot { category, choice }
}

/// Write the outfit report, one line per requested slot.
pub fn render_outfit(outfit: &Outfit, out: &mut impl fmt::Write) -> fmt::Result {
    writeln!(out, "Today's Outfit:")?;
    for slot in outfit.slots() {
        match &slot.choice {
            Some(item) => writeln!(out, "{}: {item}", slot.category.label())?,
            None => writeln!(
                out,
                "{}: Sorry, no suitable {}",
                slot.category.label(),
                slot.category.as_str()
            )?,
        }
    }
    Ok(())
}
