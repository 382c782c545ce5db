//! Time slot model.
//!
//! Time slots form a small closed ordered set. The ordinal index is
//! what the fitness rules measure distance over; the label is for
//! display only.

use serde::{Deserialize, Serialize};

/// One slot in the daily timetable grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Ordinal position in the catalog (0-based).
    pub index: usize,
    /// Display label (e.g. "10 AM").
    pub label: String,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(index: usize, label: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
        }
    }

    /// Ordinal separation between two slots.
    pub fn distance(&self, other: &TimeSlot) -> usize {
        self.index.abs_diff(other.index)
    }
}
