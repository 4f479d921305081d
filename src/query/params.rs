//! Untyped parameter set supplied by the hosting environment.

use super::QueryError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw per-invocation parameters.
///
/// Coordinates and `alternatives` are kept as JSON values so the validator can
/// reject wrong types (e.g. `"5"` or `1.7` for `alternatives`) instead of
/// letting deserialization coerce them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    /// Routing service address, overriding the configured one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Routing profile, overriding the configured one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    pub latitude1: Option<Value>,
    pub longitude1: Option<Value>,
    pub latitude2: Option<Value>,
    pub longitude2: Option<Value>,

    /// Number of alternative routes to request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Value>,

    pub distance: bool,
    pub duration: bool,
    pub summary: bool,
    pub route: bool,
    pub raw: bool,
}

impl QueryParams {
    /// Parse parameters from a JSON object.
    pub fn from_json(input: &str) -> Result<Self, QueryError> {
        serde_json::from_str(input).map_err(|e| QueryError::InvalidParameter {
            name: "params",
            reason: e.to_string(),
        })
    }

    /// Set both endpoints from numeric coordinates.
    pub fn with_points(
        mut self,
        latitude1: f64,
        longitude1: f64,
        latitude2: f64,
        longitude2: f64,
    ) -> Self {
        self.latitude1 = Some(Value::from(latitude1));
        self.longitude1 = Some(Value::from(longitude1));
        self.latitude2 = Some(Value::from(latitude2));
        self.longitude2 = Some(Value::from(longitude2));
        self
    }
}
