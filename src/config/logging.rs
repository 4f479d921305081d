//! Logging section of the config file

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Crate prefix used for per-module filter directives.
const CRATE_TARGET: &str = "routing_machine";

/// How events are rendered on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    /// One JSON object per line, for log shippers
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        })
    }
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pretty") {
            Ok(LogFormat::Pretty)
        } else if s.eq_ignore_ascii_case("json") {
            Ok(LogFormat::Json)
        } else {
            Err(ConfigError::Validation {
                field: "logging.format".to_string(),
                message: format!("expected 'pretty' or 'json', got '{}'", s),
            })
        }
    }
}

/// `[logging]` table.
///
/// Events always go to stderr so `route --json` output on stdout stays
/// machine-readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base level for every target
    pub level: String,
    pub format: LogFormat,
    /// Per-module overrides keyed by module path under the crate, e.g. `osrm = "debug"`
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub component_levels: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
            component_levels: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// `EnvFilter` directive string: the base level followed by one
    /// `routing_machine::<module>=<level>` entry per override, sorted by module.
    pub fn directives(&self) -> String {
        self.component_levels
            .iter()
            .fold(self.level.clone(), |mut acc, (module, level)| {
                acc.push_str(&format!(",{}::{}={}", CRATE_TARGET, module, level));
                acc
            })
    }

    /// Reject level strings the subscriber would fail to parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        EnvFilter::try_new(self.directives())
            .map(|_| ())
            .map_err(|e| ConfigError::Validation {
                field: "logging.level".to_string(),
                message: e.to_string(),
            })
    }
}
