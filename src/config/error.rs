//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating [`RoutingMachineConfig`](super::RoutingMachineConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Explicitly requested config file does not exist
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    /// TOML syntax or type error
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Parsed but semantically wrong (empty host, zero timeout, ...)
    #[error("Invalid value for '{field}': {message}")]
    Validation { field: String, message: String },
}
