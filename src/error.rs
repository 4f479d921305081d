//! Top-level error type.

use crate::extract::ExtractError;
use crate::osrm::ServiceError;
use crate::query::QueryError;
use thiserror::Error;

/// Errors returned by [`RoutingMachine`](crate::machine::RoutingMachine).
///
/// HTTP error statuses from the routing service are not errors here: they
/// become a degraded [`Reply`](crate::machine::Reply).
#[derive(Error, Debug)]
pub enum RoutingMachineError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}
