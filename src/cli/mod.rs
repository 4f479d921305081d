//! CLI module for the routing machine
//!
//! # Commands
//!
//! - `route` - Look up a route and print the selected facets
//! - `config` - Configuration utilities (init, show)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Distance and duration between two points, as JSON
//! routing-machine route --latitude1 52.517 --longitude1 13.388 \
//!     --latitude2 52.529 --longitude2 13.397 --distance --duration --json
//!
//! # Parameters supplied by a host environment as a JSON object
//! routing-machine route --params request.json
//! ```

pub mod completions;
pub mod config;
pub mod output;
pub mod route;

pub use completions::handle_completions;
pub use config::{handle_config_init, handle_config_show};
pub use route::run_route;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Routing Machine - route lookups against OSRM-compatible services
#[derive(Parser, Debug)]
#[command(
    name = "routing-machine",
    version,
    about = "Route lookups against OSRM-compatible routing services"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a route between two points
    Route(RouteArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Default)]
pub struct RouteArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "routing-machine.toml")]
    pub config: PathBuf,

    /// JSON file with query parameters; command-line values take precedence
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Latitude of the start point
    #[arg(long, allow_negative_numbers = true)]
    pub latitude1: Option<f64>,

    /// Longitude of the start point
    #[arg(long, allow_negative_numbers = true)]
    pub longitude1: Option<f64>,

    /// Latitude of the end point
    #[arg(long, allow_negative_numbers = true)]
    pub latitude2: Option<f64>,

    /// Longitude of the end point
    #[arg(long, allow_negative_numbers = true)]
    pub longitude2: Option<f64>,

    /// Number of alternative routes to request (positive integer)
    #[arg(short, long, allow_negative_numbers = true)]
    pub alternatives: Option<String>,

    /// Extract total distance
    #[arg(long)]
    pub distance: bool,

    /// Extract total duration
    #[arg(long)]
    pub duration: bool,

    /// Extract the first leg's summary
    #[arg(long)]
    pub summary: bool,

    /// Extract step-by-step directions
    #[arg(long)]
    pub route: bool,

    /// Attach the unprocessed service response
    #[arg(long)]
    pub raw: bool,

    /// Override routing service host
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Override routing profile
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Override request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ROUTING_MACHINE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
    /// Print the effective configuration after environment overrides
    Show(ConfigShowArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "routing-machine.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "routing-machine.toml")]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
