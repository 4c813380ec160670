//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `txt2route` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Writing the rendered text to stdout
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use txt2route::initialization::init_logger_with;
use txt2route::{run, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run(&config).await {
        Ok(result) => {
            println!("{result}");
            Ok(())
        }
        Err(e) => {
            eprintln!("txt2route error: {:#}", e);
            process::exit(1);
        }
    }
}
