//! Tracing subscriber setup
//!
//! The library crates only emit `tracing` events; binaries and tests that
//! want them on stderr call [`init`] once at startup.
//!
//! `RUST_LOG` takes precedence over the configured level when set.
//!
//! ## Environment Variables
//! - `CALHOURS_LOG_LEVEL`: Default filter directive (e.g. `debug`, `calhours_core=trace`)
//! - `CALHOURS_LOG_FORMAT`: `pretty` (default) or `json`

use calhours_domain::{impl_domain_enum_conversions, CalHoursError, Result};
use tracing_subscriber::EnvFilter;

const ENV_LOG_LEVEL: &str = "CALHOURS_LOG_LEVEL";
const ENV_LOG_FORMAT: &str = "CALHOURS_LOG_FORMAT";
const DEFAULT_LEVEL: &str = "info";

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl_domain_enum_conversions!(LogFormat {
    Pretty => "pretty",
    Json => "json",
});

/// Subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LEVEL.to_string(), format: LogFormat::default() }
    }
}

impl LoggingConfig {
    /// Read `CALHOURS_LOG_LEVEL` and `CALHOURS_LOG_FORMAT`.
    ///
    /// # Errors
    /// Returns `CalHoursError::Config` for an unknown log format.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(level) = read_env(ENV_LOG_LEVEL) {
            config.level = level;
        }
        if let Some(format) = read_env(ENV_LOG_FORMAT) {
            config.format = format
                .parse()
                .map_err(|e| CalHoursError::Config(format!("{ENV_LOG_FORMAT}: {e}")))?;
        }

        Ok(config)
    }

    fn filter(&self) -> Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.level).map_err(|e| {
                CalHoursError::Config(format!("invalid log level '{}': {e}", self.level))
            }),
        }
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Install the global tracing subscriber.
///
/// # Errors
/// Returns `CalHoursError::Config` for an invalid level directive and
/// `CalHoursError::Internal` when a global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = config.filter()?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed
        .map_err(|e| CalHoursError::Internal(format!("failed to install tracing subscriber: {e}")))?;

    tracing::debug!(level = %config.level, format = %config.format, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        std::env::remove_var(ENV_LOG_LEVEL);
        std::env::remove_var(ENV_LOG_FORMAT);
    }

    #[test]
    fn test_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn test_from_env_reads_level_and_format() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var(ENV_LOG_LEVEL, "calhours_core=debug");
        std::env::set_var(ENV_LOG_FORMAT, "JSON");

        let config = LoggingConfig::from_env().expect("valid logging env");
        assert_eq!(config.level, "calhours_core=debug");
        assert_eq!(config.format, LogFormat::Json);

        clear_env();
    }

    #[test]
    fn test_from_env_rejects_unknown_format() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var(ENV_LOG_FORMAT, "xml");
        let err = LoggingConfig::from_env().expect_err("unknown format");
        assert!(matches!(err, CalHoursError::Config(_)));

        clear_env();
    }

    #[test]
    fn test_init_twice_reports_internal_error() {
        let config = LoggingConfig::default();
        // Another test in this binary may already own the global subscriber.
        let _ = init(&config);
        let err = init(&config).expect_err("second install");
        assert!(matches!(err, CalHoursError::Internal(_)));
    }
}
