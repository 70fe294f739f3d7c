//! Core library for the Tally calculator and water intake tracker.
//!
//! This crate provides the stateful logic behind two small interactive tools,
//! independent of how they are rendered:
//!
//! - [`calculator`]: an arithmetic engine with a single pending operator,
//!   chained evaluation and a bounded memory register
//! - [`input`]: key tokens mapped onto engine operations
//! - [`tracker`]: a daily water intake log with a validated goal
//! - [`reminder`]: a cancellable repeating drink reminder
//! - [`notify`]: notification severities, sinks and the banner slot
//! - [`display`]: markdown formatting wrappers for terminal output
//!
//! Rendering is an external collaborator: the calculator writes its display
//! text to a [`Surface`], and user-facing messages go to a
//! [`NotificationSink`].
//!
//! # Quick Start
//!
//! ```rust
//! use tally_core::{Calculator, Key, TrackerBuilder};
//!
//! # fn main() -> tally_core::Result<()> {
//! let mut calc = Calculator::new();
//! for key in Key::parse_sequence("5+3=*2=")? {
//!     calc.press(key)?;
//! }
//! assert_eq!(calc.display(), "16");
//!
//! let mut log = TrackerBuilder::new().build()?;
//! log.record(250.0)?;
//! println!("{}", tally_core::display::Progress(&log));
//! # Ok(())
//! # }
//! ```

pub mod calculator;
pub mod display;
pub mod error;
pub mod input;
pub mod notify;
pub mod number;
pub mod reminder;
pub mod tracker;

// Re-export commonly used types
pub use calculator::{Calculator, CalculatorBuilder, Operator, Surface, Symbol};
pub use error::{Result, TallyError};
pub use input::Key;
pub use notify::{Banner, Notification, NotificationSink, Severity};
pub use reminder::Reminder;
pub use tracker::{IntakeEntry, IntakeLog, TrackerBuilder};
