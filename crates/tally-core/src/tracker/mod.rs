//! Water intake log with a daily goal.
//!
//! The log keeps a running total next to its entries; every mutation updates
//! both so the total always equals the sum of entry amounts.
//!
//! ```rust
//! use tally_core::tracker::TrackerBuilder;
//!
//! # fn main() -> tally_core::Result<()> {
//! let mut log = TrackerBuilder::new().with_daily_goal(Some(1000.0)).build()?;
//! log.record(250.0)?;
//! log.record(500.0)?;
//! assert_eq!(log.percentage(), 75.0);
//!
//! log.remove(0)?;
//! assert_eq!(log.current_intake(), 500.0);
//! # Ok(())
//! # }
//! ```

use jiff::Timestamp;
use log::debug;
use serde::Serialize;

pub mod builder;
pub mod entry;

#[cfg(test)]
mod tests;

pub use builder::{TrackerBuilder, DEFAULT_DAILY_GOAL};
pub use entry::{IntakeEntry, Recorded};

use crate::error::{Result, TallyError};

fn is_positive_volume(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Ordered log of drinks for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntakeLog {
    entries: Vec<IntakeEntry>,
    current_intake: f64,
    daily_goal: f64,
}

impl IntakeLog {
    pub(crate) fn with_goal(daily_goal: f64) -> Self {
        Self {
            entries: Vec::new(),
            current_intake: 0.0,
            daily_goal,
        }
    }

    pub fn entries(&self) -> &[IntakeEntry] {
        &self.entries
    }

    /// Sum of all recorded amounts, in millilitres.
    pub fn current_intake(&self) -> f64 {
        self.current_intake
    }

    pub fn daily_goal(&self) -> f64 {
        self.daily_goal
    }

    /// Records a drink taken now.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidAmount` unless the amount is a finite
    /// positive number; the log is unchanged in that case.
    pub fn record(&mut self, amount: f64) -> Result<Recorded> {
        self.record_at(amount, Timestamp::now())
    }

    /// Records a drink taken at the given time.
    ///
    /// # Errors
    ///
    /// Same as [`record`](Self::record).
    pub fn record_at(&mut self, amount: f64, timestamp: Timestamp) -> Result<Recorded> {
        if !is_positive_volume(amount) {
            return Err(TallyError::InvalidAmount { amount });
        }

        let entry = IntakeEntry { amount, timestamp };
        self.entries.push(entry.clone());
        self.current_intake += amount;
        debug!(
            "recorded {amount}ml, total {} of {}",
            self.current_intake, self.daily_goal
        );

        Ok(Recorded {
            entry,
            goal_reached: self.goal_reached(),
        })
    }

    /// Removes the entry at `index` and subtracts its amount.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::IndexOutOfRange` if there is no such entry.
    pub fn remove(&mut self, index: usize) -> Result<IntakeEntry> {
        if index >= self.entries.len() {
            return Err(TallyError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }

        let entry = self.entries.remove(index);
        self.current_intake -= entry.amount;
        if self.entries.is_empty() {
            // Drop any float residue once nothing is left to sum.
            self.current_intake = 0.0;
        }
        Ok(entry)
    }

    /// Replaces the daily goal.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidGoal` unless the goal is a finite positive
    /// number; the previous goal is kept in that case.
    pub fn set_goal(&mut self, goal: f64) -> Result<()> {
        if !is_positive_volume(goal) {
            return Err(TallyError::InvalidGoal { goal });
        }
        self.daily_goal = goal;
        Ok(())
    }

    /// Progress towards the goal as a percentage, not clamped: drinking
    /// past the goal yields values above 100. Returns 0 for a goal that is
    /// not positive.
    pub fn percentage(&self) -> f64 {
        if self.daily_goal <= 0.0 {
            return 0.0;
        }
        self.current_intake / self.daily_goal * 100.0
    }

    /// Progress bar fill, the percentage clamped to `[0, 100]`.
    pub fn bar_width(&self) -> f64 {
        self.percentage().clamp(0.0, 100.0)
    }

    pub fn goal_reached(&self) -> bool {
        self.current_intake >= self.daily_goal
    }

    /// Starts a new day: empties the log and the total, keeps the goal.
    pub fn reset_daily(&mut self) {
        self.entries.clear();
        self.current_intake = 0.0;
    }

    /// Serializes the log, total and goal as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for IntakeLog {
    fn default() -> Self {
        Self::with_goal(DEFAULT_DAILY_GOAL)
    }
}
