use clap::{Parser, Subcommand};

use crate::cli::{CalcArgs, WaterArgs};

/// Terminal calculator and water intake tracker
///
/// Tally bundles two small interactive tools: a keypad-style calculator with
/// chained operations and a memory register, and a daily water intake log
/// with a goal and a repeating drink reminder.
#[derive(Parser)]
#[command(version, about, name = "tally")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Tally CLI
///
/// - `calc`: evaluate a key sequence, or start an interactive calculator
/// - `water`: start an interactive water intake session
#[derive(Subcommand)]
pub enum Commands {
    /// Run the calculator
    #[command(alias = "c")]
    Calc(CalcArgs),
    /// Track water intake
    #[command(alias = "w")]
    Water(WaterArgs),
}
