//! Route command implementation

use crate::cli::config::load_effective_config;
use crate::cli::output::{format_reply_json, format_reply_table};
use crate::cli::RouteArgs;
use crate::config::RoutingMachineConfig;
use crate::logging::init_tracing;
use crate::machine::RoutingMachine;
use crate::osrm::OsrmClient;
use crate::query::QueryParams;
use anyhow::Context;
use serde_json::Value;
use std::sync::Arc;

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(args: &RouteArgs) -> anyhow::Result<RoutingMachineConfig> {
    let mut config = load_effective_config(&args.config)?;

    if let Some(ref host) = args.host {
        config.service.host = host.clone();
    }
    if let Some(ref profile) = args.profile {
        config.service.profile = profile.clone();
    }
    if let Some(timeout) = args.timeout {
        config.service.timeout_seconds = timeout;
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    Ok(config)
}

/// Merge the optional parameter file with command-line values
pub fn build_params(args: &RouteArgs) -> anyhow::Result<QueryParams> {
    let mut params = match &args.params {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            QueryParams::from_json(&content)?
        }
        None => QueryParams::default(),
    };

    let coordinates = [
        (&mut params.latitude1, args.latitude1),
        (&mut params.longitude1, args.longitude1),
        (&mut params.latitude2, args.latitude2),
        (&mut params.longitude2, args.longitude2),
    ];
    for (slot, value) in coordinates {
        if let Some(v) = value {
            *slot = Some(Value::from(v));
        }
    }

    // Keep the literal's JSON type so "1.7" or "\"5\"" reach validation as-is
    if let Some(ref raw) = args.alternatives {
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.clone()));
        params.alternatives = Some(value);
    }

    params.distance |= args.distance;
    params.duration |= args.duration;
    params.summary |= args.summary;
    params.route |= args.route;
    params.raw |= args.raw;

    if args.host.is_some() {
        params.host = args.host.clone();
    }
    if args.profile.is_some() {
        params.profile = args.profile.clone();
    }

    Ok(params)
}

/// Run one route query and print the reply
pub async fn run_route(args: RouteArgs) -> anyhow::Result<()> {
    let mut config = load_config_with_overrides(&args)?;
    let params = build_params(&args)?;

    if let Some(ref host) = params.host {
        config.service.host = host.clone();
    }
    config.validate()?;

    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!(
        host = %config.service.host,
        profile = %config.service.profile,
        timeout_seconds = config.service.timeout_seconds,
        "Starting route query"
    );

    let client = OsrmClient::from_config(&config.service)?;
    let machine =
        RoutingMachine::new(Arc::new(client)).with_default_profile(config.service.profile.clone());

    let reply = machine.handle(&params).await?;

    let output = if args.json {
        format_reply_json(&reply)?
    } else {
        format_reply_table(&reply)
    };
    println!("{}", output);

    Ok(())
}
