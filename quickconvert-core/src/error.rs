//! Typed conversion failures
//!
//! Each distinguishable failure cause is preserved rather than collapsed
//! into a generic error string. No error is retried: conversions are pure
//! and deterministic.

use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::Category;

/// Error type for conversion operations
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ConvertError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Covers cross-category misuse too: a unit from another category is
    /// simply absent from the requested category's list.
    #[error("Unknown unit '{unit}' in category {category}")]
    UnknownUnit { category: Category, unit: String },

    #[error("Input value is not finite")]
    NonFiniteInput,

    #[error("Conversion produced a non-finite result")]
    NonFiniteResult,

    #[error("No temperature conversion from '{from}' to '{to}'")]
    UnknownTemperatureDirection { from: String, to: String },
}

impl ConvertError {
    pub fn unknown_unit(category: Category, unit: &str) -> Self {
        ConvertError::UnknownUnit {
            category,
            unit: unit.to_string(),
        }
    }
}
