//! Error types for result extraction.

use super::Facet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The candidate has no leg, so leg-level facets cannot be read.
    #[error("Route candidate {candidate} has no legs; cannot extract '{facet}'")]
    EmptyRoute { candidate: usize, facet: Facet },
}
