//! Route query model and request validation.
//!
//! A [`Query`] is built once per invocation from caller-supplied
//! [`QueryParams`]. Validation is fail-fast and runs in a fixed order:
//!
//! 1. `latitude1`, `longitude1`, `latitude2`, `longitude2`
//! 2. `alternatives` type and range
//! 3. at least one facet flag
//!
//! The first violated check decides the returned error.

pub mod error;
pub mod params;

pub use error::QueryError;
pub use params::QueryParams;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Profile used when neither the parameters nor the configuration name one.
pub const DEFAULT_PROFILE: &str = "driving";

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Facets selected for a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetFlags {
    pub distance: bool,
    pub duration: bool,
    pub summary: bool,
    pub route: bool,
    pub raw: bool,
}

impl FacetFlags {
    /// True when at least one facet is selected.
    pub fn any(&self) -> bool {
        self.distance || self.duration || self.summary || self.route || self.raw
    }
}

/// A validated route query.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub start: Point,
    pub end: Point,
    pub profile: String,
    /// Number of alternative routes to request, `None` for the service default
    pub alternatives: Option<u32>,
    pub facets: FacetFlags,
    /// Service address for this call only, `None` to use the adapter's
    pub host: Option<String>,
}

impl Query {
    /// Validate raw parameters into a query.
    ///
    /// `default_profile` is used when `params.profile` is unset.
    pub fn from_params(params: &QueryParams, default_profile: &str) -> Result<Self, QueryError> {
        let latitude1 = coordinate("latitude1", params.latitude1.as_ref())?;
        let longitude1 = coordinate("longitude1", params.longitude1.as_ref())?;
        let latitude2 = coordinate("latitude2", params.latitude2.as_ref())?;
        let longitude2 = coordinate("longitude2", params.longitude2.as_ref())?;

        let alternatives = alternatives(params.alternatives.as_ref())?;

        let facets = FacetFlags {
            distance: params.distance,
            duration: params.duration,
            summary: params.summary,
            route: params.route,
            raw: params.raw,
        };
        if !facets.any() {
            return Err(QueryError::MissingParameter(
                "one of distance, duration, summary, route, raw",
            ));
        }

        let profile = params
            .profile
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(default_profile);
        if !is_valid_profile(profile) {
            return Err(QueryError::InvalidParameter {
                name: "profile",
                reason: format!("expected a single path segment, got {:?}", profile),
            });
        }

        let host = params
            .host
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .map(str::to_string);

        Ok(Self {
            start: Point::new(latitude1, longitude1),
            end: Point::new(latitude2, longitude2),
            profile: profile.to_string(),
            alternatives,
            facets,
            host,
        })
    }
}

/// True when `profile` can be used verbatim as one URL path segment.
pub fn is_valid_profile(profile: &str) -> bool {
    !profile.is_empty()
        && profile
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Read one coordinate. Numbers and numeric strings are accepted.
///
/// Falsy values (`null`, `false`, `""`, numeric `0`) count as missing.
fn coordinate(name: &'static str, value: Option<&Value>) -> Result<f64, QueryError> {
    let parsed = match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => {
            return Err(QueryError::MissingParameter(name))
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            return Err(QueryError::MissingParameter(name))
        }
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => {
            return Err(QueryError::MissingParameter(name))
        }
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Number(n)) => n.as_f64(),
        Some(_) => None,
    };

    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(QueryError::InvalidParameter {
            name,
            reason: format!("expected a coordinate in decimal degrees, got {}", display(value)),
        }),
    }
}

/// Read the optional alternatives count. Only JSON integers >= 1 pass.
fn alternatives(value: Option<&Value>) -> Result<Option<u32>, QueryError> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => return Ok(None),
        Some(Value::String(s)) if s.is_empty() => return Ok(None),
        _ => {}
    }

    value
        .and_then(Value::as_u64)
        .filter(|n| *n >= 1)
        .and_then(|n| u32::try_from(n).ok())
        .map(Some)
        .ok_or_else(|| QueryError::InvalidParameter {
            name: "alternatives",
            reason: format!("expected a positive integer, got {}", display(value)),
        })
}

fn display(value: Option<&Value>) -> String {
    value.map(Value::to_string).unwrap_or_default()
}
