//! Item selection: temperature bucketing plus a uniform random pick over the
//! matching items.
//!
//! Randomness comes in through the [`Picker`] trait so sessions can run on a
//! seeded generator (or a fixed stub in tests) and replay identical choices.

use crate::catalog::{Catalog, Category, Item, Style, TemperatureBand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of pick-one-of-`n` decisions.
pub trait Picker {
    /// Return an index in `0..n`. Callers only invoke this with `n >= 1`.
    fn pick(&mut self, n: usize) -> usize;
}

/// Uniform picker backed by the standard RNG.
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Seed from operating-system entropy; every session differs.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed seed; selections replay exactly for the same catalog and inputs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Picker for RandomPicker {
    fn pick(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}

/// Pick one item matching `category`, the band for `temperature_c`, and
/// `style`, or `None` when nothing in the catalog fits. With a uniform picker
/// every matching item is equally likely; item weather never enters the
/// filter.
pub fn choose<'a>(
    catalog: &'a Catalog,
    category: Category,
    temperature_c: i32,
    style: Style,
    picker: &mut dyn Picker,
) -> Option<&'a Item> {
    let band = TemperatureBand::from_celsius(temperature_c);
    let matches: Vec<&Item> = catalog
        .items()
        .iter()
        .filter(|item| item.matches(category, band, style))
        .collect();
    if matches.is_empty() {
        return None;
    }
    Some(matches[picker.pick(matches.len())])
}
