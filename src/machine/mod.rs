//! Request orchestration: validate, fetch once, extract, reply.

pub mod reply;

pub use reply::{Reply, RETURNCODE_OK};

use crate::error::RoutingMachineError;
use crate::extract::ExtractionPipeline;
use crate::osrm::client::normalize_host;
use crate::osrm::{RouteService, ServiceError};
use crate::query::{Query, QueryParams, DEFAULT_PROFILE};
use std::sync::Arc;
use tracing::{Instrument, Span};

/// Route lookup adapter.
///
/// Holds no per-request state; one instance can serve any number of
/// sequential or concurrent calls. Logging goes through the injected span.
pub struct RoutingMachine {
    service: Arc<dyn RouteService>,
    default_profile: String,
    span: Span,
}

impl RoutingMachine {
    pub fn new(service: Arc<dyn RouteService>) -> Self {
        Self {
            service,
            default_profile: DEFAULT_PROFILE.to_string(),
            span: tracing::info_span!("routing_machine"),
        }
    }

    /// Profile used when the parameters do not name one.
    pub fn with_default_profile(mut self, profile: impl Into<String>) -> Self {
        self.default_profile = profile.into();
        self
    }

    /// Parent span for every event this instance emits.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Validate `params`, then run the query.
    ///
    /// Validation failures are returned before any network activity.
    pub async fn handle(&self, params: &QueryParams) -> Result<Reply, RoutingMachineError> {
        let query = self
            .span
            .in_scope(|| Query::from_params(params, &self.default_profile))
            .inspect_err(|e| {
                let _enter = self.span.enter();
                tracing::warn!(error = %e, "Rejected route query");
            })?;

        self.execute(&query).await
    }

    /// Run an already validated query.
    ///
    /// A `query.host` that differs from the adapter's service is reached
    /// through [`RouteService::rebind`] for this call only.
    pub async fn execute(&self, query: &Query) -> Result<Reply, RoutingMachineError> {
        let service = self.service_for(query)?;
        let span = tracing::debug_span!(
            parent: &self.span,
            "route",
            host = %service.base_url(),
            profile = %query.profile,
            start = %query.start,
            end = %query.end,
        );

        self.run(service.as_ref(), query).instrument(span).await
    }

    fn service_for(&self, query: &Query) -> Result<Arc<dyn RouteService>, ServiceError> {
        match query.host.as_deref() {
            Some(host) if normalize_host(host) != self.service.base_url() => {
                let _enter = self.span.enter();
                tracing::debug!(host, "Using per-call routing host");
                self.service.rebind(host)
            }
            _ => Ok(Arc::clone(&self.service)),
        }
    }

    async fn run(
        &self,
        service: &dyn RouteService,
        query: &Query,
    ) -> Result<Reply, RoutingMachineError> {
        let fetch = match service.route(query).await {
            Ok(fetch) => fetch,
            Err(ServiceError::Transport { status, message }) => {
                tracing::warn!(status, %message, "Routing service returned an error status");
                return Ok(Reply::failure(status));
            }
            Err(e) => {
                tracing::error!(error = %e, "Routing service call failed");
                return Err(e.into());
            }
        };
        tracing::debug!(
            candidates = fetch.response.routes.len(),
            "Received route response"
        );

        let pipeline = ExtractionPipeline::for_facets(&query.facets);
        let routes = pipeline.run(&fetch.response.routes)?;

        let mut reply = Reply::success(query, routes);
        if query.facets.raw {
            tracing::debug!("Attaching raw response");
            reply.raw = Some(fetch.raw);
        }

        tracing::debug!(returncode = %reply.returncode, "Route query complete");
        Ok(reply)
    }
}
