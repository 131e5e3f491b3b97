//! Error type for configuration loading.

use thiserror::Error;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    /// Well-formed TOML with out-of-range or unknown values.
    #[error("invalid config: {0}")]
    Invalid(String),
}
