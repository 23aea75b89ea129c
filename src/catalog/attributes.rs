//! Closed attribute vocabularies for catalog items.
//!
//! Every enumerated field on an item lives here: the wardrobe category, the
//! temperature band, the style, and the weather an item is meant for. Parsing
//! is the single gate: raw strings from the catalog file and from interactive
//! prompts are trimmed, lowercased, and matched against the closed set, and
//! anything else is rejected at that boundary so the rest of the crate only
//! ever sees valid values.

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Celsius reading at or above which a day counts as hot.
pub const HOT_FLOOR_C: i32 = 21;
/// Celsius reading at or above which a day counts as medium; below is cold.
pub const MEDIUM_FLOOR_C: i32 = 15;

/// Wardrobe slot an item occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Category {
    Jacket,
    Shirt,
    Pants,
    Shoes,
}

/// Temperature bucket an item is suited for.
///
/// Daily readings are folded into the same three buckets by
/// [`TemperatureBand::from_celsius`], so items and conditions compare
/// directly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TemperatureBand {
    Cold,
    Medium,
    Hot,
}

/// Dress code an item belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Style {
    Casual,
    Formal,
}

/// Weather an item is recorded for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Weather {
    Rainy,
    Sunny,
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).ok_or_else(|| {
            D::Error::custom(format!(
                "unknown category '{value}' (expected jacket, shirt, pants, or shoes)"
            ))
        })
    }
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Jacket => "jacket",
            Category::Shirt => "shirt",
            Category::Pants => "pants",
            Category::Shoes => "shoes",
        }
    }

    /// Capitalized form used at the start of report lines.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Jacket => "Jacket",
            Category::Shirt => "Shirt",
            Category::Pants => "Pants",
            Category::Shoes => "Shoes",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "jacket" => Some(Category::Jacket),
            "shirt" => Some(Category::Shirt),
            "pants" => Some(Category::Pants),
            "shoes" => Some(Category::Shoes),
            _ => None,
        }
    }
}

impl Serialize for TemperatureBand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TemperatureBand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).ok_or_else(|| {
            D::Error::custom(format!(
                "unknown temperature '{value}' (expected cold, medium, or hot)"
            ))
        })
    }
}

impl TemperatureBand {
    /// Bucket a Celsius reading: hot at or above 21, medium at or above 15,
    /// cold below that.
    pub fn from_celsius(temperature_c: i32) -> Self {
        if temperature_c >= HOT_FLOOR_C {
            TemperatureBand::Hot
        } else if temperature_c >= MEDIUM_FLOOR_C {
            TemperatureBand::Medium
        } else {
            TemperatureBand::Cold
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureBand::Cold => "cold",
            TemperatureBand::Medium => "medium",
            TemperatureBand::Hot => "hot",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cold" => Some(TemperatureBand::Cold),
            "medium" => Some(TemperatureBand::Medium),
            "hot" => Some(TemperatureBand::Hot),
            _ => None,
        }
    }
}

impl Serialize for Style {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).ok_or_else(|| {
            D::Error::custom(format!(
                "unknown style '{value}' (expected casual or formal)"
            ))
        })
    }
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Casual => "casual",
            Style::Formal => "formal",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "casual" => Some(Style::Casual),
            "formal" => Some(Style::Formal),
            _ => None,
        }
    }
}

impl Serialize for Weather {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Weather {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).ok_or_else(|| {
            D::Error::custom(format!(
                "unknown weather '{value}' (expected rainy or sunny)"
            ))
        })
    }
}

impl Weather {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Rainy => "rainy",
            Weather::Sunny => "sunny",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rainy" => Some(Weather::Rainy),
            "sunny" => Some(Weather::Sunny),
            _ => None,
        }
    }
}
