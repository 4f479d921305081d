//! Routing Machine - route lookup adapter for OSRM-compatible services
//!
//! Validates a two-point route query, issues one request to the routing
//! service, and extracts the selected facets (distance, duration, summary,
//! step-by-step directions, raw payload) from every candidate route.
//!
//! # Example
//!
//! ```no_run
//! use routing_machine::machine::RoutingMachine;
//! use routing_machine::osrm::OsrmClient;
//! use routing_machine::query::QueryParams;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OsrmClient::new("localhost:5000", Duration::from_secs(5))?;
//! let machine = RoutingMachine::new(Arc::new(client));
//!
//! let params = QueryParams {
//!     distance: true,
//!     duration: true,
//!     ..QueryParams::default().with_points(52.517, 13.388, 52.529, 13.397)
//! };
//! let reply = machine.handle(&params).await?;
//! println!("{}", serde_json::to_string_pretty(&reply)?);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod machine;
pub mod osrm;
pub mod query;

pub use error::RoutingMachineError;
