//! Kata Application Library
//!
//! Command-line driver for the kata drills: configuration, logging,
//! execution and result output.

/// Command-line arguments and subcommands.
pub mod config;
pub mod demo;
/// Application error type.
pub mod error;
pub mod execution;
pub mod logging;
/// Text and CSV rendering of results.
pub mod output;

pub use config::AppConfig;
pub use error::AppError;

use anyhow::{Context, Result};
use clap::Parser;
use crate::config::Command;
use std::io::Write;

/// Runs the configured command and writes its results to `writer`.
///
/// Results are written before a failing demo is reported, so every case is
/// visible even when some answers are wrong.
///
/// # Errors
///
/// Returns the `AppError` raised by the command, an I/O error from writing,
/// or `AppError::DemoFailed` when demo answers do not match.
pub fn run<W: Write>(config: &AppConfig, writer: &mut W) -> Result<(), AppError> {
    log::debug!("Loaded Config: {config:?}");

    let records = execution::run_command(&config.command)?;
    output::write_records(&records, config.format, writer)?;

    if config.command == Command::Demo {
        demo::check_records(&records)?;
    }
    Ok(())
}

/// Entry point shared by the `kata` binary and the workspace root binary.
///
/// # Errors
///
/// Propagates any failure from [`run`] with context attached.
pub fn main() -> Result<()> {
    let config = AppConfig::parse();
    logging::init_logger(&config);

    log::info!("Kata starting");
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run(&config, &mut handle).context("kata command failed")?;
    log::info!("Kata finished");
    Ok(())
}
