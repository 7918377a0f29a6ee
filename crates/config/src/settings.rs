//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use realty_core::SortKey;

use crate::constants::env;
use crate::{ConfigError, MortgageConfig};

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if strict validation should be applied
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Mortgage calculator business parameters
    #[serde(default)]
    pub mortgage: MortgageConfig,

    /// Listing search configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Listing search configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchConfig {
    /// JSON file with `{ "properties": [...] }`; listings are injected by the
    /// caller when unset
    #[serde(default)]
    pub listings_path: Option<String>,

    /// Sort applied when a request does not name one
    #[serde(default)]
    pub default_sort: SortKey,
}

/// Observability configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.mortgage.validate()?;
        self.validate_search()?;
        self.validate_observability()?;
        Ok(())
    }

    fn validate_search(&self) -> Result<(), ConfigError> {
        match &self.search.listings_path {
            Some(path) if path.trim().is_empty() => Err(ConfigError::InvalidValue {
                field: "search.listings_path".to_string(),
                message: "Must not be empty when set".to_string(),
            }),
            Some(path) if !Path::new(path).exists() => {
                if self.environment.is_strict() {
                    Err(ConfigError::FileNotFound(path.clone()))
                } else {
                    tracing::warn!(path = %path, "Listings file not found");
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }

    fn validate_observability(&self) -> Result<(), ConfigError> {
        let level = self.observability.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!(
                    "Unknown level '{}', expected one of {:?}",
                    self.observability.log_level, LOG_LEVELS
                ),
            });
        }
        Ok(())
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (REALTY__ prefix, `__` between nested keys)
/// 2. config/{env}.{yaml,toml} (if env specified)
/// 3. config/default.{yaml,toml}
/// 4. Built-in defaults
pub fn load_settings(env_name: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new(env::CONFIG_DIR), env_name)
}

/// Load settings for the environment named by `REALTY_ENV`, if any
pub fn load_settings_for_current_env() -> Result<Settings, ConfigError> {
    let env_name = match std::env::var(env::ENV_VAR) {
        Ok(name) => Some(name),
        Err(std::env::VarError::NotPresent) => None,
        Err(e) => return Err(ConfigError::Environment(e.to_string())),
    };
    load_settings(env_name.as_deref())
}

/// Same as [`load_settings`] with an explicit configuration directory
pub fn load_settings_from(
    config_dir: &Path,
    env_name: Option<&str>,
) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::from(config_dir.join("default")).required(false));

    if let Some(env_name) = env_name {
        builder = builder.add_source(File::from(config_dir.join(env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix(env::PREFIX)
            .separator(env::SEPARATOR)
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    tracing::debug!(
        environment = ?settings.environment,
        dir = %config_dir.display(),
        "Loaded settings"
    );

    Ok(settings)
}
