//! Conversion categories
//!
//! Every unit belongs to exactly one category; cross-category conversion
//! is never attempted.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::ConvertError;

/// A partition of mutually convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Length,
    Weight,
    Volume,
    Speed,
    Time,
    Temperature,
    Energy,
    Power,
    Pressure,
    Data,
    #[serde(rename = "Fuel Economy")]
    FuelEconomy,
    Angle,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 12] = [
        Category::Length,
        Category::Weight,
        Category::Volume,
        Category::Speed,
        Category::Time,
        Category::Temperature,
        Category::Energy,
        Category::Power,
        Category::Pressure,
        Category::Data,
        Category::FuelEconomy,
        Category::Angle,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Volume => "Volume",
            Category::Speed => "Speed",
            Category::Time => "Time",
            Category::Temperature => "Temperature",
            Category::Energy => "Energy",
            Category::Power => "Power",
            Category::Pressure => "Pressure",
            Category::Data => "Data",
            Category::FuelEconomy => "Fuel Economy",
            Category::Angle => "Angle",
        }
    }

    /// Resolve a category from its label
    ///
    /// This is the string boundary where `UnknownCategory` lives: inside
    /// the typed API a `Category` value is valid by construction.
    pub fn parse(name: &str) -> Result<Category, ConvertError> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConvertError::UnknownCategory(name.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        for cat in Category::ALL {
            assert_eq!(Category::parse(cat.label()).unwrap(), cat);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Category::parse("length").unwrap(), Category::Length);
        assert_eq!(Category::parse("fuel economy").unwrap(), Category::FuelEconomy);
    }

    #[test]
    fn test_parse_unknown() {
        let err = Category::parse("Currency").unwrap_err();
        assert_eq!(err, ConvertError::UnknownCategory("Currency".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Category::FuelEconomy), "Fuel Economy");
        assert_eq!(format!("{}", Category::Speed), "Speed");
    }
}
