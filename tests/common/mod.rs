//! Shared test utilities for routing-machine integration tests.
//!
//! Provides canned OSRM responses and helpers to wire a `RoutingMachine`
//! to a wiremock server.

#![allow(dead_code)]

use routing_machine::machine::RoutingMachine;
use routing_machine::osrm::OsrmClient;
use routing_machine::query::QueryParams;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Well-Known Test Constants
// =============================================================================

/// Path for a driving route between (39, 39) and (40, 40); OSRM puts longitude first.
pub const DRIVING_ROUTE_PATH: &str = "/route/v1/driving/39,39;40,40";

// =============================================================================
// Response Builders
// =============================================================================

/// A single-candidate response with the given totals and a three-step leg.
pub fn route_body(distance: f64, duration: f64) -> Value {
    json!({
        "code": "Ok",
        "routes": [{
            "distance": distance,
            "duration": duration,
            "weight": duration,
            "weight_name": "routability",
            "legs": [{
                "distance": distance,
                "duration": duration,
                "summary": "Main Street, Harbour Road",
                "steps": [
                    {"name": "Main Street", "maneuver": {"type": "depart", "bearing_after": 90}},
                    {
                        "name": "Harbour Road",
                        "maneuver": {"type": "turn", "modifier": "slight right"}
                    },
                    {"name": "Harbour Road", "maneuver": {"type": "arrive", "modifier": "left"}}
                ]
            }]
        }],
        "waypoints": [
            {"name": "Main Street", "location": [39.0, 39.0]},
            {"name": "Harbour Road", "location": [40.0, 40.0]}
        ]
    })
}

/// A response with several candidates, distances in the given order.
pub fn alternatives_body(distances: &[f64]) -> Value {
    let routes: Vec<Value> = distances
        .iter()
        .map(|d| {
            json!({
                "distance": d,
                "duration": 600,
                "legs": [{"summary": format!("via {d}"), "steps": []}]
            })
        })
        .collect();
    json!({"code": "Ok", "routes": routes, "waypoints": []})
}

// =============================================================================
// Query Builders
// =============================================================================

/// Valid coordinates with no facet selected.
pub fn base_params() -> QueryParams {
    QueryParams::default().with_points(39.0, 39.0, 40.0, 40.0)
}

// =============================================================================
// Machine Builders
// =============================================================================

/// Mount a route mock answering every route request with `status` and `body`.
pub async fn mount_route(server: &MockServer, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/[a-z]+/.+"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Create a machine talking to the mock server.
pub fn make_machine(server: &MockServer) -> RoutingMachine {
    let client = OsrmClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
    RoutingMachine::new(Arc::new(client))
}
