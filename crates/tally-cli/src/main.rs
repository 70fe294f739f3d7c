//! Tally CLI Application
//!
//! Command-line front end for the Tally calculator and water intake tracker.

mod args;
mod cli;
mod renderer;
mod session;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::CalcArgs;
use log::info;
use renderer::TerminalRenderer;
use session::{CalcSession, WaterSession};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();
    let renderer = TerminalRenderer::new(!no_color);

    info!("Tally started");

    match command {
        Some(Calc(args)) => CalcSession::run(args, renderer).await,
        Some(Water(args)) => WaterSession::start(&args, renderer)?.run().await,
        None => CalcSession::run(CalcArgs::default(), renderer).await,
    }
}
