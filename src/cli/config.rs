//! `config` subcommands

use crate::cli::{ConfigInitArgs, ConfigShowArgs};
use crate::config::RoutingMachineConfig;
use anyhow::Context;
use std::path::Path;

const EXAMPLE_CONFIG: &str = include_str!("../../routing-machine.example.toml");

/// File values with environment overrides applied.
///
/// A missing file is not an error; the defaults are used instead.
pub fn load_effective_config(path: &Path) -> anyhow::Result<RoutingMachineConfig> {
    let config = if path.exists() {
        RoutingMachineConfig::load(Some(path))
            .with_context(|| format!("loading {}", path.display()))?
    } else {
        tracing::debug!(path = %path.display(), "Config file not found, using defaults");
        RoutingMachineConfig::default()
    };
    Ok(config.with_env_overrides())
}

/// Write the annotated example config to `args.output`.
pub fn handle_config_init(args: &ConfigInitArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            args.output.display()
        );
    }
    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    std::fs::write(&args.output, EXAMPLE_CONFIG)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!("✓ Configuration file created: {}", args.output.display());
    println!("  Point [service].host at your routing server before running queries.");
    Ok(())
}

/// Render the effective configuration as TOML.
pub fn render_config(args: &ConfigShowArgs) -> anyhow::Result<String> {
    let config = load_effective_config(&args.config)?;
    config.validate()?;
    Ok(toml::to_string_pretty(&config)?)
}

/// Handle `routing-machine config show`
pub fn handle_config_show(args: &ConfigShowArgs) -> anyhow::Result<()> {
    print!("{}", render_config(args)?);
    Ok(())
}
