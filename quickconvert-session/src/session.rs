//! Conversion session
//!
//! Holds the selected category, the from/to unit pair and the rolling
//! history. One session per caller; conversions themselves stay pure.

use quickconvert_core::{Category, ConvertError};
use quickconvert_units::{convert, units_of};
use crate::{History, HistoryEntry};

/// Explicit session state for a conversion caller
#[derive(Debug, Clone)]
pub struct Session {
    category: Category,
    from_unit: String,
    to_unit: String,
    history: History,
}

impl Session {
    /// Fresh session with the default selection: Length, meters -> kilometers
    pub fn new() -> Self {
        Session {
            category: Category::Length,
            from_unit: "meters".to_string(),
            to_unit: "kilometers".to_string(),
            history: History::new(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn from_unit(&self) -> &str {
        &self.from_unit
    }

    pub fn to_unit(&self) -> &str {
        &self.to_unit
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Switch category; the selection resets to the category's first two
    /// units when the current names do not belong to it.
    pub fn select_category(&mut self, category: Category) {
        self.category = category;
        let units = units_of(category);
        if !units.contains(&self.from_unit.as_str()) {
            if let Some(first) = units.first() {
                self.from_unit = first.to_string();
            }
        }
        if !units.contains(&self.to_unit.as_str()) {
            if let Some(second) = units.get(1).or_else(|| units.first()) {
                self.to_unit = second.to_string();
            }
        }
    }

    /// Select the unit pair within the current category
    pub fn select_units(&mut self, from_unit: &str, to_unit: &str) -> Result<(), ConvertError> {
        let units = units_of(self.category);
        for unit in [from_unit, to_unit] {
            if !units.contains(&unit) {
                return Err(ConvertError::unknown_unit(self.category, unit));
            }
        }
        self.from_unit = from_unit.to_string();
        self.to_unit = to_unit.to_string();
        Ok(())
    }

    /// Exchange the from/to units
    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
    }

    /// Convert a value with the current selection, recording it on success
    pub fn convert(&mut self, value: f64) -> Result<f64, ConvertError> {
        let result = convert(value, &self.from_unit, &self.to_unit, self.category)?;
        self.history.push(HistoryEntry::new(
            value,
            &self.from_unit,
            result,
            &self.to_unit,
        ));
        Ok(result)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
