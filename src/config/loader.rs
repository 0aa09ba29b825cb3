//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A config value is well-typed but outside its valid domain.
    ///
    /// Rejected eagerly rather than clamped to a default that would hide
    /// the mistake in the user's config file.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// The offending field.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/viewcore/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Default overscan (extra items materialized on both ends).
    #[serde(default)]
    pub overscan: Option<usize>,

    /// Intersection ratio for lazy-load triggering.
    #[serde(default)]
    pub lazy_threshold: Option<f64>,

    /// Root margin for lazy-load observations (host syntax, e.g. "200px").
    #[serde(default)]
    pub lazy_root_margin: Option<String>,

    /// Root margin for pagination-sentinel observations.
    #[serde(default)]
    pub incremental_root_margin: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults with an optional config file.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreConfig {
    /// Default overscan for viewports.
    pub overscan: usize,
    /// Intersection ratio for lazy-load triggering.
    pub lazy_threshold: f64,
    /// Root margin for lazy-load observations.
    pub lazy_root_margin: String,
    /// Root margin for pagination-sentinel observations.
    pub incremental_root_margin: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            overscan: 2,
            lazy_threshold: 0.0,
            lazy_root_margin: "0px".to_string(),
            incremental_root_margin: "0px".to_string(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/viewcore/viewcore.log` on Unix-like systems, or
/// the platform equivalent elsewhere. Falls back to the current directory
/// if no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("viewcore").join("viewcore.log")
    } else {
        PathBuf::from("viewcore.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/viewcore/config.toml` on Unix, the platform
/// equivalent elsewhere, or `None` if no config directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("viewcore").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument
/// 2. `VIEWCORE_CONFIG` environment variable
/// 3. Default path `~/.config/viewcore/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("VIEWCORE_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults and validate the result.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for a `lazy_threshold` outside
/// `[0, 1]` or non-finite.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<CoreConfig, ConfigError> {
    let defaults = CoreConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let merged = CoreConfig {
        overscan: config.overscan.unwrap_or(defaults.overscan),
        lazy_threshold: config.lazy_threshold.unwrap_or(defaults.lazy_threshold),
        lazy_root_margin: config.lazy_root_margin.unwrap_or(defaults.lazy_root_margin),
        incremental_root_margin: config
            .incremental_root_margin
            .unwrap_or(defaults.incremental_root_margin),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    };

    if !merged.lazy_threshold.is_finite() || !(0.0..=1.0).contains(&merged.lazy_threshold) {
        return Err(ConfigError::InvalidValue {
            field: "lazy_threshold",
            reason: format!("must be within [0, 1], got {}", merged.lazy_threshold),
        });
    }

    Ok(merged)
}

/// Load and resolve the effective configuration in one step.
///
/// # Errors
///
/// Propagates read/parse errors and value validation failures.
pub fn resolve_config(config_path: Option<PathBuf>) -> Result<CoreConfig, ConfigError> {
    merge_config(load_config_with_precedence(config_path)?)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
