//! OSRM HTTP client.
//!
//! Issues `GET {base}/route/v1/{profile}/{lon1},{lat1};{lon2},{lat2}` with
//! step-level detail and the requested alternatives count.

use super::{RouteFetch, RouteService, ServiceError};
use crate::config::ServiceConfig;
use crate::query::Query;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Client for an OSRM-compatible routing service.
pub struct OsrmClient {
    /// Base URL (e.g., "http://router.project-osrm.org")
    base_url: String,
    /// Deadline applied to every request
    timeout: Duration,
    client: Client,
}

impl OsrmClient {
    pub fn new(host: &str, timeout: Duration) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Configuration(e.to_string()))?;

        Ok(Self {
            base_url: normalize_host(host),
            timeout,
            client,
        })
    }

    /// Build a client from the `[service]` configuration section.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ServiceError> {
        Self::new(&config.host, config.timeout())
    }

    fn route_url(&self, query: &Query) -> String {
        format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.base_url,
            query.profile,
            query.start.longitude,
            query.start.latitude,
            query.end.longitude,
            query.end.latitude,
        )
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

#[async_trait]
impl RouteService for OsrmClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn route(&self, query: &Query) -> Result<RouteFetch, ServiceError> {
        let url = self.route_url(query);
        let alternatives = query
            .alternatives
            .map(|n| n.to_string())
            .unwrap_or_else(|| "false".to_string());

        tracing::debug!(%url, %alternatives, "Requesting route");

        let response = self
            .client
            .get(&url)
            .query(&[("steps", "true"), ("alternatives", alternatives.as_str())])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ServiceError::Timeout(self.timeout_ms())
                } else {
                    ServiceError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ServiceError::Transport {
                status: status.as_u16(),
                message,
            });
        }

        let raw: Value = response.json().await.map_err(|e| {
            ServiceError::InvalidResponse(format!("Failed to read route response: {}", e))
        })?;

        RouteFetch::from_raw(raw)
    }

    fn rebind(&self, host: &str) -> Result<Arc<dyn RouteService>, ServiceError> {
        Ok(Arc::new(OsrmClient::new(host, self.timeout)?))
    }
}

/// Prefix bare hosts with `http://` and drop trailing slashes.
pub(crate) fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{}", host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{FacetFlags, Point};
    use mockito::{Matcher, Server};

    fn test_query(alternatives: Option<u32>) -> Query {
        Query {
            start: Point::new(39.0, 39.5),
            end: Point::new(40.0, 40.5),
            profile: "driving".to_string(),
            alternatives,
            facets: FacetFlags {
                distance: true,
                ..FacetFlags::default()
            },
            host: None,
        }
    }

    fn test_client(base_url: String) -> OsrmClient {
        OsrmClient::new(&base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_normalize_host() {
        assert_eq!(
            normalize_host("router.project-osrm.org"),
            "http://router.project-osrm.org"
        );
        assert_eq!(
            normalize_host("https://osrm.example.com/"),
            "https://osrm.example.com"
        );
        assert_eq!(normalize_host("localhost:5000"), "http://localhost:5000");
    }

    #[test]
    fn test_route_url_uses_lon_lat_order() {
        let client = test_client("localhost:5000".to_string());
        assert_eq!(
            client.route_url(&test_query(None)),
            "http://localhost:5000/route/v1/driving/39.5,39;40.5,40"
        );
    }

    #[tokio::test]
    async fn test_route_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/route/v1/driving/39.5,39;40.5,40")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("steps".into(), "true".into()),
                Matcher::UrlEncoded("alternatives".into(), "false".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"code":"Ok","routes":[{"distance":1500,"duration":90061,"legs":[]}]}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        let fetch = client.route(&test_query(None)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(fetch.response.routes.len(), 1);
        assert_eq!(fetch.raw["code"], "Ok");
    }

    #[tokio::test]
    async fn test_route_forwards_alternatives() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/route/v1/driving/39.5,39;40.5,40")
            .match_query(Matcher::UrlEncoded("alternatives".into(), "3".into()))
            .with_status(200)
            .with_body(r#"{"code":"Ok","routes":[]}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        client.route(&test_query(Some(3))).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_route_error_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .with_status(400)
            .with_body(r#"{"code":"InvalidQuery","message":"Query string malformed"}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        let err = client.route(&test_query(None)).await.unwrap_err();

        mock.assert_async().await;
        match err {
            ServiceError::Transport { status, message } => {
                assert_eq!(status, 400);
                assert!(message.contains("InvalidQuery"));
            }
            other => panic!("Expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_route_invalid_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = test_client(server.url());
        let err = client.route(&test_query(None)).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidResponse(_)));
    }

    #[test]
    fn test_rebind_keeps_timeout() {
        let client = OsrmClient::new("localhost:5000", Duration::from_millis(750)).unwrap();
        let rebound = client.rebind("osrm.internal:5000/").unwrap();
        assert_eq!(rebound.base_url(), "http://osrm.internal:5000");
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_timeout_ms_saturates() {
        let client = OsrmClient::new("localhost:5000", Duration::MAX).unwrap();
        assert_eq!(client.timeout_ms(), u64::MAX);
    }

    #[tokio::test]
    async fn test_route_unreachable() {
        // Port 9 (discard) is closed on test machines
        let client = test_client("http://127.0.0.1:9".to_string());
        let err = client.route(&test_query(None)).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Network(_) | ServiceError::Timeout(_)
        ));
    }
}
