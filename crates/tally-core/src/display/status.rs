//! Status lines for the calculator readout and notifications.

use std::fmt;

use crate::{
    calculator::{Calculator, Surface},
    notify::{Notification, Severity},
};

/// Wrapper type for displaying the calculator's screen.
///
/// Shows the display text, followed by the pending operator when one is
/// waiting for its second operand.
pub struct Readout<'a, S>(pub &'a Calculator<S>);

impl<'a, S: Surface> fmt::Display for Readout<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`", self.0.display())?;
        if let Some(op) = self.0.operator() {
            write!(f, " (pending `{}` {op})", self.0.previous_input())?;
        }
        writeln!(f)
    }
}

/// Wrapper type for displaying a notification with its severity label.
pub struct NotificationLine<'a>(pub &'a Notification);

impl<'a> fmt::Display for NotificationLine<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.0.severity {
            Severity::Success => "Success:",
            Severity::Reminder => "Reminder:",
            Severity::Info => "Info:",
            Severity::Error => "Error:",
            Severity::Default => "Note:",
        };
        writeln!(f, "{label} {}", self.0.message)
    }
}
