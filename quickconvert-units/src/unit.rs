//! Conversion rules relative to a category base unit

use serde::{Serialize, Deserialize};

/// How a unit relates to its category's base quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Rule {
    /// `base = value * factor`, with a positive factor
    Linear(f64),
    /// `base = factor / value`
    ///
    /// Used only by fuel economy's "1/100km": liters per 100 km is the
    /// inverse of the distance-per-volume base and cannot be expressed as
    /// a scalar multiple of it. The transform is its own inverse.
    Reciprocal(f64),
}

impl Rule {
    /// Convert a value in this unit to the category base quantity
    pub fn to_base(&self, value: f64) -> f64 {
        match self {
            Rule::Linear(factor) => value * factor,
            Rule::Reciprocal(factor) => factor / value,
        }
    }

    /// Convert a value in the category base quantity to this unit
    pub fn from_base(&self, base: f64) -> f64 {
        match self {
            Rule::Linear(factor) => base / factor,
            Rule::Reciprocal(factor) => factor / base,
        }
    }
}
