//! Error types for routing service calls.

use thiserror::Error;

/// Errors that can occur while querying the routing service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Network connectivity error (DNS, connection refused, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the configured deadline.
    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    /// Routing service answered with an HTTP error status (4xx, 5xx).
    #[error("Routing service error {status}: {message}")]
    Transport { status: u16, message: String },

    /// Response body doesn't match the expected route format.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client could not be built from the given settings.
    #[error("Configuration error: {0}")]
    Configuration(String),
}
