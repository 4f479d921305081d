//! Wire types for the OSRM `route` service response.
//!
//! Only the fields the extractors read are modelled. The full payload is kept
//! separately as a [`serde_json::Value`] for the `raw` facet.

use serde::{Deserialize, Serialize};

/// Decoded `/route/v1` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    /// Service status code, `"Ok"` on success
    #[serde(default)]
    pub code: String,
    /// Candidate routes, best first
    #[serde(default)]
    pub routes: Vec<RouteCandidate>,
}

/// One candidate path between the requested points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    /// Total distance in meters
    pub distance: f64,
    /// Total duration in seconds
    pub duration: f64,
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

impl RouteCandidate {
    pub fn first_leg(&self) -> Option<&RouteLeg> {
        self.legs.first()
    }
}

/// Portion of a route between two waypoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Names of the most significant roads on the leg
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub steps: Vec<RouteStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Road name, empty when unnamed
    #[serde(default)]
    pub name: String,
    pub maneuver: Maneuver,
}

/// Instruction at the start of a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maneuver {
    /// Maneuver kind (`depart`, `turn`, `arrive`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Direction hint (`left`, `slight right`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route_response() {
        let body = r#"{
            "code": "Ok",
            "routes": [{
                "distance": 1500.4,
                "duration": 90061.2,
                "weight": 12.0,
                "legs": [{
                    "summary": "Main Street, High Street",
                    "steps": [
                        {
                            "name": "Main Street",
                            "maneuver": {"type": "depart", "location": [1.0, 2.0]}
                        },
                        {"name": "High Street", "maneuver": {"type": "turn", "modifier": "left"}}
                    ]
                }]
            }],
            "waypoints": []
        }"#;

        let response: RouteResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.code, "Ok");
        assert_eq!(response.routes.len(), 1);

        let route = &response.routes[0];
        assert_eq!(route.distance, 1500.4);
        let leg = route.first_leg().unwrap();
        assert_eq!(leg.summary, "Main Street, High Street");
        assert_eq!(leg.steps[0].maneuver.kind, "depart");
        assert_eq!(leg.steps[0].maneuver.modifier, None);
        assert_eq!(leg.steps[1].maneuver.modifier.as_deref(), Some("left"));
    }

    #[test]
    fn test_parse_route_without_legs() {
        let route: RouteCandidate =
            serde_json::from_str(r#"{"distance": 10, "duration": 2}"#).unwrap();
        assert!(route.first_leg().is_none());
    }

    #[test]
    fn test_parse_unnamed_step() {
        let step: RouteStep =
            serde_json::from_str(r#"{"maneuver": {"type": "arrive"}}"#).unwrap();
        assert_eq!(step.name, "");
        assert_eq!(step.maneuver.kind, "arrive");
    }
}
