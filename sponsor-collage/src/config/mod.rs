//! Configuration management: defaults, validation, loading from CLI + environment.

pub mod app_config;
pub mod defaults;
pub mod validation;

pub use app_config::CollageConfig;

/// Errors raised while assembling the configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}
