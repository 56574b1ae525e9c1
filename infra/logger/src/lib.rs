//! # Logger
//!
//! Installs the global `tracing` subscriber from the `[logging]` section of the configuration:
//! a compact console layer, a daily rolling file layer (plain or JSON lines), and an env filter.
//! An explicit `filter` wins over `RUST_LOG`; without one, `RUST_LOG` refines `level`.
//!
//! ```rust
//! use scriba_domain::config::LoggingConfig;
//! use scriba_logger::Logger;
//!
//! let config = LoggingConfig { level: "debug".to_owned(), ..LoggingConfig::default() };
//! let _logger = Logger::init("scriba", &config).unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};

use scriba_domain::config::LoggingConfig;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_SUFFIX: &str = "log";

/// Handle to the installed subscriber.
///
/// Owns the background file writer; keep it alive until shutdown so buffered records are flushed.
#[must_use = "Dropping this handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Installs the global subscriber for the binary `name` (also the log file prefix).
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for a blank name, an unknown level, an invalid
    ///   filter, zero `max_files`, or when neither console nor file output is enabled.
    /// * [`LoggerError::Io`] or [`LoggerError::Appender`] if the log directory is unusable.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(name: &str, config: &LoggingConfig) -> Result<Self, LoggerError> {
        validate(name, config)?;
        let filter = env_filter(config)?;

        let mut layers = Vec::new();
        if config.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match &config.path {
            Some(dir) => {
                let (writer, guard) =
                    tracing_appender::non_blocking(appender(name, dir, config.max_files)?);
                let file = layer().with_writer(writer).with_ansi(false);
                layers.push(if config.json { file.json().boxed() } else { file.boxed() });
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;
        tracing::debug!(name, level = %config.level, files = guard.is_some(), "Logger installed");

        Ok(Self { guard })
    }

    /// Whether records are also written to rolling files.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

fn invalid(message: impl Into<Cow<'static, str>>) -> LoggerError {
    LoggerError::InvalidConfiguration { message: message.into(), context: None }
}

fn validate(name: &str, config: &LoggingConfig) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(invalid("Logger name cannot be empty"));
    }
    if !config.console && config.path.is_none() {
        return Err(invalid("No log output enabled, set `console` or `path`"));
    }
    if config.path.is_some() && config.max_files == 0 {
        return Err(invalid("`max_files` must be greater than zero"));
    }
    Ok(())
}

fn level(config: &LoggingConfig) -> Result<LevelFilter, LoggerError> {
    config
        .level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|e| invalid(format!("Invalid log level '{}': {e}", config.level)))
}

fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level(config)?.into());
    match &config.filter {
        Some(directives) => builder
            .parse(directives)
            .map_err(|e| invalid(format!("Invalid log filter '{directives}': {e}"))),
        None => Ok(builder.from_env_lossy()),
    }
}

fn appender(name: &str, dir: &Path, max_files: usize) -> Result<RollingFileAppender, LoggerError> {
    fs::create_dir_all(dir).context(format!("Failed to create log directory {}", dir.display()))?;

    Ok(RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(max_files)
        .build(dir)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_level(level: &str) -> LoggingConfig {
        LoggingConfig { level: level.to_owned(), ..LoggingConfig::default() }
    }

    #[test]
    fn parses_config_level_strings() {
        assert_eq!(level(&with_level("debug")).ok(), Some(LevelFilter::DEBUG));
        assert_eq!(level(&with_level(" WARN ")).ok(), Some(LevelFilter::WARN));
        assert_eq!(level(&with_level("off")).ok(), Some(LevelFilter::OFF));
        assert!(level(&with_level("loud")).is_err_and(|e| e.is_invalid_configuration()));
    }

    #[test]
    fn rejects_settings_before_installing_anything() {
        let defaults = LoggingConfig::default();
        assert!(Logger::init("  ", &defaults).is_err_and(|e| e.is_invalid_configuration()));
        assert!(Logger::init("scriba", &with_level("loud")).is_err_and(|e| e.is_invalid_configuration()));

        let silent = LoggingConfig { console: false, ..LoggingConfig::default() };
        assert!(validate("scriba", &silent).is_err());

        let no_files =
            LoggingConfig { path: Some("logs".into()), max_files: 0, ..LoggingConfig::default() };
        assert!(validate("scriba", &no_files).is_err());
        assert!(validate("scriba", &defaults).is_ok());
    }

    #[test]
    fn invalid_filter_is_reported() {
        let config =
            LoggingConfig { filter: Some("scriba=loud".to_owned()), ..LoggingConfig::default() };
        assert!(env_filter(&config).is_err_and(|e| e.to_string().contains("scriba=loud")));
    }
}
