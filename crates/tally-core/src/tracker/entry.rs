//! Intake log entry model.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{display::LocalTime, number::format_decimal};

/// A single drink recorded in the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeEntry {
    /// Volume in millilitres, always finite and positive
    pub amount: f64,
    /// When the drink was recorded
    pub timestamp: Timestamp,
}

impl fmt::Display for IntakeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "💧 {}ml at {}",
            format_decimal(self.amount),
            LocalTime(&self.timestamp)
        )
    }
}

/// Result of recording a drink.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    /// The entry that was appended
    pub entry: IntakeEntry,
    /// Whether the running total now meets the daily goal
    pub goal_reached: bool,
}
