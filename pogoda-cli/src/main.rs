//! Binary crate for the `pogoda` terminal weather viewer.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive single-screen mode
//! - Human-friendly output formatting

use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

mod cli;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_config = ConfigBuilder::new().build();
    let _ = TermLogger::init(LevelFilter::Warn, log_config, TerminalMode::Stderr, ColorChoice::Auto);

    let cmd = cli::Cli::parse();
    cmd.run().await
}
