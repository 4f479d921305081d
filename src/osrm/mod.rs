//! Routing service abstraction.
//!
//! This module provides the [`RouteService`] trait the adapter talks to, and
//! [`OsrmClient`], its implementation over the OSRM HTTP API.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub mod client;
pub mod error;
pub mod types;

pub use client::OsrmClient;
pub use error::ServiceError;
pub use types::{Maneuver, RouteCandidate, RouteLeg, RouteResponse, RouteStep};

use crate::query::Query;

/// A successful routing service answer.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteFetch {
    /// Unprocessed response body
    pub raw: Value,
    /// Typed view of `raw`
    pub response: RouteResponse,
}

impl RouteFetch {
    /// Decode a response body, keeping the original value alongside.
    pub fn from_raw(raw: Value) -> Result<Self, ServiceError> {
        let response = RouteResponse::deserialize(&raw).map_err(|e| {
            ServiceError::InvalidResponse(format!("Failed to parse route response: {}", e))
        })?;
        Ok(Self { raw, response })
    }
}

/// A service able to compute a route between two points.
///
/// # Object Safety
///
/// This trait is object-safe and designed to be used as `Arc<dyn RouteService>`.
#[async_trait]
pub trait RouteService: Send + Sync + 'static {
    /// Base URL of the service, for logging.
    fn base_url(&self) -> &str;

    /// Issue exactly one route request for `query`.
    ///
    /// # Returns
    ///
    /// - `Ok(RouteFetch)` on a 2xx answer with a decodable body
    /// - `Err(ServiceError::Transport)` if the service returned an error status
    /// - `Err(ServiceError::Network)` if the service was unreachable
    /// - `Err(ServiceError::Timeout)` if the request exceeded its deadline
    /// - `Err(ServiceError::InvalidResponse)` if the body is not a route response
    async fn route(&self, query: &Query) -> Result<RouteFetch, ServiceError>;

    /// A service with the same settings talking to `host` instead.
    ///
    /// Backs per-call host overrides. Services that cannot be redirected
    /// keep the default, which refuses.
    fn rebind(&self, host: &str) -> Result<Arc<dyn RouteService>, ServiceError> {
        Err(ServiceError::Configuration(format!(
            "{} cannot be redirected to {}",
            self.base_url(),
            host
        )))
    }
}
