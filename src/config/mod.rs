//! Configuration module.
//!
//! Optional TOML config file for tunable defaults (overscan, lazy-load
//! threshold and margins, log path), merged over hardcoded defaults with
//! eager validation.

pub mod loader;

pub use loader::{
    default_config_path, default_log_path, load_config_file, load_config_with_precedence,
    merge_config, resolve_config, ConfigError, ConfigFile, CoreConfig,
};
