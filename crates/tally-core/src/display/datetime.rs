//! DateTime display utilities.
//!
//! Wrapper types for formatting timestamps in the system timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that displays the wall-clock time of day in
/// the system timezone.
///
/// # Format
///
/// `HH:MM:SS` in 24-hour format, zero-padded. Intake log entries only ever
/// span one day, so the date is left out.
pub struct LocalTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.to_zoned(TimeZone::system()).strftime("%H:%M:%S")
        )
    }
}

/// A wrapper around `Timestamp` that displays date, time and timezone
/// abbreviation in the system timezone: `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}
