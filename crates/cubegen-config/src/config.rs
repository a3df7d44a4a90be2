//! Generator configuration and layered loading

use cubegen_core::ProcessingOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "cubegen.toml";

/// Prefix for environment overrides, e.g. `CUBEGEN__LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "CUBEGEN__";

/// Prefix for processor options set through the environment, e.g.
/// `CUBEGEN__OPTIONS__MODULE_LIBCUBE_VERSION=3.2`
pub const ENV_OPTIONS_PREFIX: &str = "CUBEGEN__OPTIONS__";

const OPTION_KEY_ROOT: &str = "cubeengine";

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Result type alias for convenience
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to load configuration: {message}")]
    Load { message: String },

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    /// Create a new load error
    pub fn load(message: impl Into<String>) -> Self {
        Self::Load {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Top-level generator configuration
///
/// ```toml
/// [logging]
/// level = "debug"
///
/// [options]
/// "cubeengine.module.version" = "1.0"
/// "cubeengine.module.libcube.version" = "3.2"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub logging: LoggingConfig,
    /// Build options handed to the processor, keyed by full option name
    pub options: BTreeMap<String, String>,
}

impl GeneratorConfig {
    /// Load configuration.
    ///
    /// Priority order (highest to lowest):
    /// 1. Environment variables (`CUBEGEN__*`, options via `CUBEGEN__OPTIONS__*`)
    /// 2. `config_path`, or `cubegen.toml` in the working directory if present
    /// 3. Default values
    ///
    /// Option keys contain dots, which figment would read as nesting, so
    /// option variables bypass figment and go through [`option_key_from_env`].
    /// Their values are kept as raw strings.
    ///
    /// An explicit `config_path` that does not exist is an error.
    pub fn load(config_path: Option<&Path>) -> ConfigResult<Self> {
        use figment::{
            providers::{Env, Format, Serialized, Toml},
            Figment,
        };

        let mut figment = Figment::from(Serialized::defaults(GeneratorConfig::default()));

        match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    figment = figment.merge(Toml::file(path));
                }
            }
        }

        let env = Env::prefixed(ENV_PREFIX)
            .filter(|key| !is_option_key(key.as_str()))
            .split("__");

        let mut config: GeneratorConfig = figment
            .merge(env)
            .extract()
            .map_err(|e| ConfigError::load(e.to_string()))?;

        for (key, value) in Env::prefixed(ENV_OPTIONS_PREFIX).iter() {
            if let Some(option) = option_key_from_env(key.as_str()) {
                config.options.insert(option, value);
            }
        }

        config.validate()?;

        Ok(config)
    }

    /// Apply command-line options on top of the loaded ones
    pub fn with_options<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.options.extend(overrides);
        self
    }

    pub fn processing_options(&self) -> ProcessingOptions {
        ProcessingOptions::from(self.options.clone())
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if !VALID_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::invalid(format!(
                "Invalid log level '{}', must be one of: {}",
                self.logging.level,
                VALID_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

/// True for a prefix-stripped variable that belongs to the `options` table
fn is_option_key(key: &str) -> bool {
    key.to_ascii_lowercase().starts_with("options__")
}

/// Map the part of a variable after `CUBEGEN__OPTIONS__` to an option key.
///
/// `MODULE_LIBCUBE_VERSION` becomes `cubeengine.module.libcube.version`:
/// lower-cased, `_` read as `.`. Returns `None` for an empty name.
pub fn option_key_from_env(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    Some(format!(
        "{}.{}",
        OPTION_KEY_ROOT,
        name.to_ascii_lowercase().replace('_', ".")
    ))
}
