//! Configuration loader
//!
//! Loads the classification policy from a file, then applies environment
//! overrides on top.
//!
//! ## Loading Strategy
//! 1. Use the given path, or probe the standard locations for a file
//! 2. With no file anywhere, start from the built-in defaults
//! 3. Apply environment overrides
//! 4. Validate the result, compiling every pattern once
//!
//! Files may be JSON or TOML (detected by extension) and only need the
//! fields they change; everything else keeps its default.
//!
//! ## Environment Variables
//! - `CALHOURS_DEFAULT_TAG`: Tag for events with no manual or color tag
//! - `CALHOURS_MIN_DURATION_MINUTES`: Shortest event kept, in minutes
//! - `CALHOURS_FULL_DAY_HOURS`: Hours credited per all-day day
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./calhours.json` or `./calhours.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use calhours_core::PatternRegistry;
use calhours_domain::{CalHoursError, ClassifierConfig, Result};

const ENV_DEFAULT_TAG: &str = "CALHOURS_DEFAULT_TAG";
const ENV_MIN_DURATION_MINUTES: &str = "CALHOURS_MIN_DURATION_MINUTES";
const ENV_FULL_DAY_HOURS: &str = "CALHOURS_FULL_DAY_HOURS";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["calhours.json", "calhours.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// With `path`, that file must exist. Without it, the standard locations are
/// probed and the defaults are used when nothing is found. Environment
/// overrides are applied last, then the result is validated.
///
/// # Errors
/// Returns `CalHoursError::Config` if:
/// - The given file does not exist or cannot be read
/// - File format is invalid
/// - An environment override has an invalid value
/// - The final configuration fails validation or a pattern does not compile
pub fn load(path: Option<PathBuf>) -> Result<ClassifierConfig> {
    let base = match path {
        Some(p) => load_from_file(Some(p))?,
        None => match probe_config_paths() {
            Some(found) => load_from_file(Some(found))?,
            None => {
                tracing::info!("No config file found, using built-in defaults");
                ClassifierConfig::default()
            }
        },
    };

    let config = apply_env_overrides(base)?;
    let registry = PatternRegistry::compile(config)?;
    Ok(registry.config().clone())
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations for a config file.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `CalHoursError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClassifierConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CalHoursError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            CalHoursError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| CalHoursError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `CalHoursError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<ClassifierConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| CalHoursError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| CalHoursError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(CalHoursError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard paths for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Apply `CALHOURS_*` environment overrides to a loaded configuration
///
/// Unset variables leave the field untouched.
///
/// # Errors
/// Returns `CalHoursError::Config` if a set variable cannot be parsed.
pub fn apply_env_overrides(mut config: ClassifierConfig) -> Result<ClassifierConfig> {
    if let Some(tag) = env_opt(ENV_DEFAULT_TAG) {
        tracing::debug!(tag = %tag, "default tag overridden from environment");
        config.tags.default_tag = tag;
    }
    if let Some(minutes) = env_parse::<u32>(ENV_MIN_DURATION_MINUTES)? {
        tracing::debug!(minutes, "minimum duration overridden from environment");
        config.hours.min_duration_minutes = minutes;
    }
    if let Some(hours) = env_parse::<f64>(ENV_FULL_DAY_HOURS)? {
        tracing::debug!(hours, "full-day hours overridden from environment");
        config.hours.default_full_day_hours = hours;
    }
    Ok(config)
}

/// Read an environment variable, treating empty values as unset
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Parse an optional environment variable
///
/// # Errors
/// Returns `CalHoursError::Config` if the variable is set but invalid.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_opt(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| CalHoursError::Config(format!("Invalid value for {key}: {e}")))
        })
        .transpose()
}
