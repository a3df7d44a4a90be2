//! Configuration management for the plugin generator
//!
//! This crate provides the configuration type, its layered loading logic and
//! logging initialization.

pub mod config;
pub mod logging;

// Re-export commonly used types at the crate root for convenience
pub use config::{
    option_key_from_env, ConfigError, ConfigResult, GeneratorConfig, LogFormat, LoggingConfig,
    DEFAULT_CONFIG_FILE, ENV_OPTIONS_PREFIX, ENV_PREFIX,
};
