//! Collection wrapper types for displaying the intake log.

use std::fmt;

use crate::tracker::IntakeEntry;

/// Newtype wrapper for displaying intake log entries with their indices.
///
/// The index shown is the one `remove` expects. Handles empty logs
/// gracefully.
///
/// # Examples
///
/// ```rust
/// use tally_core::{display::IntakeEntries, tracker::IntakeEntry};
/// use jiff::Timestamp;
///
/// let entries = vec![IntakeEntry {
///     amount: 250.0,
///     timestamp: Timestamp::now(),
/// }];
/// let output = IntakeEntries(&entries).to_string();
/// assert!(output.contains("250ml"));
/// ```
pub struct IntakeEntries<'a>(pub &'a [IntakeEntry]);

impl<'a> fmt::Display for IntakeEntries<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No water logged yet.");
        }
        for (index, entry) in self.0.iter().enumerate() {
            writeln!(f, "- `[{index}]` {entry}")?;
        }
        Ok(())
    }
}
