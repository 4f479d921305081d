//! Reply handed back to the caller.

use crate::extract::ExtractionResult;
use crate::query::{Point, Query};
use serde::Serialize;
use serde_json::Value;

/// Return code of a successful reply.
pub const RETURNCODE_OK: &str = "OK";

/// Outcome of one route query.
///
/// On success every field except `raw` is set (`raw` only when requested).
/// When the routing service answered with an HTTP error, only `returncode`
/// is set, holding the status code as a string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub returncode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// Unprocessed service response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
    /// One result per candidate route, in service order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<ExtractionResult>>,
}

impl Reply {
    pub fn success(query: &Query, routes: Vec<ExtractionResult>) -> Self {
        Self {
            returncode: RETURNCODE_OK.to_string(),
            start: Some(query.start),
            end: Some(query.end),
            profile: Some(query.profile.clone()),
            raw: None,
            routes: Some(routes),
        }
    }

    /// Degraded reply for an HTTP error status.
    pub fn failure(status: u16) -> Self {
        Self {
            returncode: status.to_string(),
            start: None,
            end: None,
            profile: None,
            raw: None,
            routes: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.returncode == RETURNCODE_OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::FacetFlags;
    use serde_json::json;

    fn test_query() -> Query {
        Query {
            start: Point::new(39.0, 39.0),
            end: Point::new(40.0, 40.0),
            profile: "driving".to_string(),
            alternatives: None,
            facets: FacetFlags {
                distance: true,
                ..FacetFlags::default()
            },
            host: None,
        }
    }

    #[test]
    fn test_failure_reply_only_has_returncode() {
        let reply = Reply::failure(500);
        assert!(!reply.is_success());
        assert_eq!(serde_json::to_value(&reply).unwrap(), json!({"returncode": "500"}));
    }

    #[test]
    fn test_success_reply_echoes_query() {
        let reply = Reply::success(&test_query(), vec![]);
        assert!(reply.is_success());

        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["returncode"], "OK");
        assert_eq!(json["start"], json!({"latitude": 39.0, "longitude": 39.0}));
        assert_eq!(json["profile"], "driving");
        assert_eq!(json["routes"], json!([]));
        assert!(json.get("raw").is_none());
    }
}
