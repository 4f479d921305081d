//! Tracing subscriber setup
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary (see [`init_tracing`]).

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Resolve the filter for `config`.
///
/// `RUST_LOG`, when set and parseable, takes precedence over the configured
/// directives.
///
/// ```
/// use routing_machine::config::LoggingConfig;
/// use routing_machine::logging::build_env_filter;
///
/// let filter = build_env_filter(&LoggingConfig::default()).unwrap();
/// assert!(filter.to_string().contains("warn"));
/// ```
pub fn build_env_filter(
    config: &LoggingConfig,
) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(config.directives()),
    }
}

/// Install the global subscriber writing to stderr.
///
/// Fails if the directives do not parse or a subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = build_env_filter(config)?;
    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_filter_accepts_component_levels() {
        let config = LoggingConfig {
            component_levels: BTreeMap::from([("osrm".to_string(), "debug".to_string())]),
            ..LoggingConfig::default()
        };
        if std::env::var("RUST_LOG").is_err() {
            let filter = build_env_filter(&config).unwrap();
            assert!(filter.to_string().contains("routing_machine::osrm=debug"));
        }
    }

    #[test]
    fn test_filter_rejects_unknown_level() {
        let config = LoggingConfig {
            component_levels: BTreeMap::from([("osrm".to_string(), "loud".to_string())]),
            ..LoggingConfig::default()
        };
        if std::env::var("RUST_LOG").is_err() {
            assert!(build_env_filter(&config).is_err());
        }
    }
}
