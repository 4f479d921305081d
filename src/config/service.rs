//! Routing service configuration

use super::ConfigError;
use crate::query::{is_valid_profile, DEFAULT_PROFILE};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public OSRM demo server. Rate limited; point `host` at your own instance
/// for anything beyond light use.
pub const DEFAULT_HOST: &str = "http://router.project-osrm.org";

/// Where and how to reach the routing service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Service address, with or without scheme
    pub host: String,
    /// Routing profile (driving, walking, cycling, ...)
    pub profile: String,
    /// Deadline for the route request
    pub timeout_seconds: u64,
}

impl ServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// The profile becomes a URL path segment and must be usable verbatim.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &str, message: &str| ConfigError::Validation {
            field: format!("service.{}", field),
            message: message.to_string(),
        };

        if self.host.trim().is_empty() {
            return Err(invalid("host", "host cannot be empty"));
        }
        if self.profile.trim().is_empty() {
            return Err(invalid("profile", "profile cannot be empty"));
        }
        if !is_valid_profile(&self.profile) {
            return Err(invalid(
                "profile",
                "profile must be a single path segment of letters, digits, '_' or '-'",
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(invalid("timeout_seconds", "timeout must be non-zero"));
        }
        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            profile: DEFAULT_PROFILE.to_string(),
            timeout_seconds: 10,
        }
    }
}
