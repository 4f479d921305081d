//! Configuration module for the routing machine
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments and per-invocation parameters (highest priority)
//! 2. Environment variables (`ROUTING_MACHINE_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use routing_machine::config::RoutingMachineConfig;
//!
//! let toml = r#"
//! [service]
//! host = "localhost:5000"
//! "#;
//! let config: RoutingMachineConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.service.host, "localhost:5000");
//! assert_eq!(config.service.profile, "driving");
//! ```

pub mod error;
pub mod logging;
pub mod service;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use service::{ServiceConfig, DEFAULT_HOST};

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Unified configuration: routing service settings and logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RoutingMachineConfig {
    /// Routing service connection settings
    pub service: ServiceConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl RoutingMachineConfig {
    /// Read a TOML file. `None` yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Layer `ROUTING_MACHINE_*` variables over the loaded values.
    ///
    /// Unparseable values leave the previous setting in place.
    pub fn with_env_overrides(mut self) -> Self {
        env_override("ROUTING_MACHINE_HOST", &mut self.service.host);
        env_override("ROUTING_MACHINE_PROFILE", &mut self.service.profile);
        env_override("ROUTING_MACHINE_TIMEOUT", &mut self.service.timeout_seconds);
        env_override("ROUTING_MACHINE_LOG_LEVEL", &mut self.logging.level);
        env_override("ROUTING_MACHINE_LOG_FORMAT", &mut self.logging.format);
        self
    }

    /// Check every section, reporting the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.service.validate()?;
        self.logging.validate()
    }
}

fn env_override<T: FromStr>(var: &str, slot: &mut T) {
    let Ok(raw) = std::env::var(var) else {
        return;
    };
    match raw.parse() {
        Ok(value) => *slot = value,
        Err(_) => tracing::debug!(var, value = %raw, "Ignoring unparseable environment override"),
    }
}
