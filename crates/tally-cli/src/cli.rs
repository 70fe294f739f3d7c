//! Command-line argument definitions using clap
//!
//! Implements the CLI side of the parameter wrapper pattern: clap-derived
//! argument structs that convert into the core builders, keeping clap out of
//! `tally-core`.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Builders → Session
//! ```
//!
//! The water session reuses the same machinery for its line commands: each
//! line typed at the prompt is parsed by [`WaterLine`] with no binary name.

use clap::{Args, Parser, Subcommand};
use tally_core::{calculator::CalculatorBuilder, tracker::TrackerBuilder};

/// Evaluate a key sequence or start an interactive calculator
///
/// Keys: digits, `.`, `+ - * /`, `=` to evaluate, `<` to delete, `c` to
/// clear, and `ms`, `mr`, `mc`, `m+` for memory. Without KEYS, each line read
/// from stdin is a key sequence; `quit` ends the session.
#[derive(Args, Default)]
pub struct CalcArgs {
    /// Key sequence to evaluate, e.g. "5+3=*2="
    #[arg(allow_hyphen_values = true)]
    pub keys: Option<String>,
    /// Print every display update, not just the final readout
    #[arg(long)]
    pub trace: bool,
    #[arg(long, help = "Number of fractional digits results are rounded to (default 6)")]
    pub precision: Option<u32>,
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Magnitude bound of the memory register (default 1e12)"
    )]
    pub memory_limit: Option<f64>,
}

impl From<&CalcArgs> for CalculatorBuilder {
    fn from(val: &CalcArgs) -> Self {
        let mut builder = CalculatorBuilder::new();
        if let Some(precision) = val.precision {
            builder = builder.with_precision(precision);
        }
        if let Some(limit) = val.memory_limit {
            builder = builder.with_memory_limit(limit);
        }
        builder
    }
}

/// Start an interactive water intake session
///
/// Reads commands from stdin; type `help` for the list.
#[derive(Args, Default)]
pub struct WaterArgs {
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Daily goal in millilitres (default 2000)"
    )]
    pub goal: Option<f64>,
    /// Start a drink reminder with this interval in minutes
    #[arg(long)]
    pub remind: Option<u32>,
}

impl From<&WaterArgs> for TrackerBuilder {
    fn from(val: &WaterArgs) -> Self {
        TrackerBuilder::new().with_daily_goal(val.goal)
    }
}

/// One line typed into the water session
#[derive(Parser)]
#[command(
    name = "water",
    no_binary_name = true,
    disable_version_flag = true,
    disable_help_flag = true
)]
pub struct WaterLine {
    #[command(subcommand)]
    pub command: WaterCommand,
}

#[derive(Subcommand)]
pub enum WaterCommand {
    /// Log a drink, in millilitres
    #[command(alias = "a")]
    Add {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Remove a log entry by its index
    #[command(aliases = ["rm", "d"])]
    Remove { index: usize },
    /// Set the daily goal, in millilitres
    #[command(alias = "g")]
    Goal {
        #[arg(allow_negative_numbers = true)]
        goal: f64,
    },
    /// Remind to drink every N minutes, replacing any running reminder
    #[command(alias = "r")]
    Remind { minutes: u32 },
    /// Stop the drink reminder
    Stop,
    /// Start a new day: clear the log, keep the goal
    Reset,
    /// Show progress and reminder state
    #[command(alias = "s")]
    Status,
    /// List today's drinks
    #[command(aliases = ["l", "ls"])]
    Log,
    /// Print the log as JSON
    Export,
    /// End the session
    #[command(aliases = ["q", "exit"])]
    Quit,
}

impl WaterLine {
    /// Parses a prompt line into a command.
    pub fn parse_line(line: &str) -> Result<WaterCommand, clap::Error> {
        Self::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
    }
}
