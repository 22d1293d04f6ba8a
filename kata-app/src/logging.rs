//! Logging setup for the application.

use crate::config::{AppConfig, GlobalLogLevel};
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the logger from the application settings.
///
/// Without `--log-level` the filter comes from `RUST_LOG`, defaulting to
/// `warn` so that standard output carries only results. With `--log-level`
/// the given level applies to every module. Logs are written to standard error.
pub fn init_logger(config: &AppConfig) {
    let env = Env::default().filter_or("RUST_LOG", "warn");
    let mut builder = Builder::from_env(env);

    if let Some(level) = config.global_log_level {
        builder.filter_level(level_filter(level));
    }

    // A second initialisation (e.g. from tests) keeps the first logger.
    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
        return;
    }

    log::debug!(
        "Logger initialized with global log level: {:?}",
        config.global_log_level
    );
}

const fn level_filter(level: GlobalLogLevel) -> LevelFilter {
    match level {
        GlobalLogLevel::Trace => LevelFilter::Trace,
        GlobalLogLevel::Debug => LevelFilter::Debug,
        GlobalLogLevel::Info => LevelFilter::Info,
        GlobalLogLevel::Warn => LevelFilter::Warn,
        GlobalLogLevel::Error => LevelFilter::Error,
    }
}
