//! Progress display for the intake log.

use std::fmt;

use crate::{number::format_decimal, tracker::IntakeLog};

/// Number of cells in the rendered progress bar.
const BAR_CELLS: usize = 20;

/// Wrapper type for displaying progress towards the daily goal.
///
/// The bar is clamped to a full bar, while the percentage text keeps
/// counting past 100%.
///
/// # Examples
///
/// ```rust
/// use tally_core::{display::Progress, tracker::TrackerBuilder};
///
/// # fn main() -> tally_core::Result<()> {
/// let mut log = TrackerBuilder::new().with_daily_goal(Some(1000.0)).build()?;
/// log.record(1500.0)?;
/// let output = Progress(&log).to_string();
/// assert!(output.contains("1500 / 1000 ml"));
/// assert!(output.contains("150%"));
/// # Ok(())
/// # }
/// ```
pub struct Progress<'a>(pub &'a IntakeLog);

impl<'a> Progress<'a> {
    /// Rounded percentage text, e.g. `75%`.
    pub fn percentage_text(&self) -> String {
        format!("{}%", format_decimal(self.0.percentage().round()))
    }

    fn bar(&self) -> String {
        let filled = (self.0.bar_width() / 100.0 * BAR_CELLS as f64).round() as usize;
        let filled = filled.min(BAR_CELLS);
        format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
    }
}

impl<'a> fmt::Display for Progress<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Water Intake")?;
        writeln!(f)?;
        writeln!(
            f,
            "**{} / {} ml** ({})",
            format_decimal(self.0.current_intake()),
            format_decimal(self.0.daily_goal()),
            self.percentage_text()
        )?;
        writeln!(f, "`{}`", self.bar())
    }
}
