//! Rolling conversion history

use std::fmt;
use serde::{Serialize, Deserialize};

/// How many entries the display window shows
pub const DISPLAY_WINDOW: usize = 5;

/// One successful conversion, immutable once created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub input_value: f64,
    pub from_unit: String,
    pub output_value: f64,
    pub to_unit: String,
}

impl HistoryEntry {
    pub fn new(input_value: f64, from_unit: &str, output_value: f64, to_unit: &str) -> Self {
        HistoryEntry {
            input_value,
            from_unit: from_unit.to_string(),
            output_value,
            to_unit: to_unit.to_string(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {:.2} {}",
            self.input_value, self.from_unit, self.output_value, self.to_unit
        )
    }
}

/// Append-only in-memory log of successful conversions
///
/// Retention is unbounded; `recent` yields the display window. Appends
/// from concurrent callers must be serialized by the owner (a mutex or a
/// single-writer task); the log itself takes `&mut self`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        History { entries: Vec::new() }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// The last `DISPLAY_WINDOW` entries, oldest first
    pub fn recent(&self) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(DISPLAY_WINDOW);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
