//! Display formatting wrappers.
//!
//! Domain types implement [`std::fmt::Display`] for their own one-line form
//! (an [`IntakeEntry`](crate::tracker::IntakeEntry), a
//! [`Notification`](crate::notify::Notification)); the newtype wrappers here
//! add context-specific markdown for the terminal front end.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Types   │    │    Wrappers     │    │    Markdown     │
//! │ (IntakeLog,     │───▶│ (Progress,      │───▶│     Output      │
//! │  Calculator)    │    │  Readout, ...)  │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: the intake log listing ([`IntakeEntries`])
//! - [`progress`]: goal progress with a clamped bar ([`Progress`])
//! - [`status`]: calculator readout and notification lines
//! - [`datetime`]: timestamp formatting in the system timezone

pub mod collections;
pub mod datetime;
pub mod progress;
pub mod status;

pub use collections::IntakeEntries;
pub use datetime::{LocalDateTime, LocalTime};
pub use progress::Progress;
pub use status::{NotificationLine, Readout};
