//! Error types for query validation.

use thiserror::Error;

/// Errors raised while turning caller parameters into a [`Query`](super::Query).
///
/// Both variants are raised before any network activity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A required coordinate is absent, or no facet was selected.
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    /// A supplied parameter has the wrong type or is out of range.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl QueryError {
    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            QueryError::MissingParameter(name) => name,
            QueryError::InvalidParameter { name, .. } => name,
        }
    }
}
