//! Configuration management for the realty engines
//!
//! Supports loading configuration from:
//! - YAML/TOML files (`config/default.*`, `config/{env}.*`)
//! - Environment variables (REALTY__ prefix)
//! - Runtime overrides
//!
//! Business constants for the mortgage calculator live in [`MortgageConfig`];
//! listing search defaults in [`SearchConfig`].

pub mod constants;
pub mod mortgage;
pub mod settings;
pub mod telemetry;

pub use mortgage::MortgageConfig;
pub use settings::{
    load_settings, load_settings_for_current_env, load_settings_from, ObservabilityConfig,
    RuntimeEnvironment, SearchConfig, Settings,
};
pub use telemetry::init_tracing;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment error: {0}")]
    Environment(String),

    #[error("Tracing setup failed: {0}")]
    Telemetry(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
