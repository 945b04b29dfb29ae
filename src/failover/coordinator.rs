//! Active provider coordination.
//!
//! # Responsibilities
//! - Hold exactly one active route provider
//! - Delegate route requests to it
//! - Swap it atomically on failover
//!
//! # Design Decisions
//! - The active handle lives in an `ArcSwap`: readers never block the writer
//! - Each request takes a full snapshot, so a switch never affects a request
//!   already in flight
//! - Route failures are reported, never turned into failover

use std::sync::Arc;
use arc_swap::ArcSwap;
use thiserror::Error;
use crate::failover::Switchable;
use crate::observability::metrics;
use crate::routing::{Location, Route, RouteError, RouteProvider};

/// Failure of a request made through the coordinator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavigationError {
    /// The active provider could not produce a route.
    #[error("provider '{provider}' failed to compute route: {source}")]
    ProviderCompute {
        provider: String,
        #[source]
        source: RouteError,
    },
}

impl NavigationError {
    /// Name of the provider that was active for the failed request.
    pub fn provider(&self) -> &str {
        match self {
            NavigationError::ProviderCompute { provider, .. } => provider,
        }
    }
}

/// Routes requests to whichever provider is currently active.
pub struct FailoverCoordinator {
    active: ArcSwap<Arc<dyn RouteProvider>>,
}

impl FailoverCoordinator {
    pub fn new(initial: Arc<dyn RouteProvider>) -> Self {
        tracing::info!(provider = initial.name(), "Initial data source");
        metrics::record_active_provider(initial.name());
        Self {
            active: ArcSwap::from_pointee(initial),
        }
    }

    /// Make `provider` the active one. Returns the name of the provider it replaced.
    pub fn switch_active_provider(&self, provider: Arc<dyn RouteProvider>) -> String {
        let name = provider.name().to_string();
        let previous = self.active.swap(Arc::new(provider));

        tracing::info!(from = previous.name(), to = %name, "Switched data source");
        metrics::record_active_provider(&name);
        previous.name().to_string()
    }

    /// Snapshot of the active provider.
    pub fn active(&self) -> Arc<dyn RouteProvider> {
        Arc::clone(&**self.active.load())
    }

    pub fn active_name(&self) -> String {
        self.active.load().name().to_string()
    }

    pub fn get_route(&self, origin: Location, destination: Location) -> Result<Route, NavigationError> {
        let provider = self.active();
        let result = provider.compute_route(origin, destination);
        Self::finish(provider.as_ref(), "compute", result)
    }

    pub fn update_route(&self, current: Location) -> Result<Route, NavigationError> {
        let provider = self.active();
        let result = provider.update_route(current);
        Self::finish(provider.as_ref(), "update", result)
    }

    /// [`FailoverCoordinator::get_route`], logging the outcome.
    pub fn navigate(&self, origin: Location, destination: Location) -> Result<Route, NavigationError> {
        let route = self.get_route(origin, destination)?;
        tracing::info!(
            from = %origin,
            to = %destination,
            provider = route.source(),
            eta_minutes = route.estimated_minutes(),
            "Navigating"
        );
        Ok(route)
    }

    /// [`FailoverCoordinator::update_route`], logging the outcome.
    pub fn update_navigation(&self, current: Location) -> Result<Route, NavigationError> {
        let route = self.update_route(current)?;
        tracing::info!(
            at = %current,
            provider = route.source(),
            eta_minutes = route.estimated_minutes(),
            "Navigation updated"
        );
        Ok(route)
    }

    fn finish(
        provider: &dyn RouteProvider,
        op: &'static str,
        result: Result<Route, RouteError>,
    ) -> Result<Route, NavigationError> {
        metrics::record_route_request(provider.name(), op, result.is_ok());
        result.map_err(|source| {
            tracing::warn!(provider = provider.name(), op, error = %source, "Route request failed");
            NavigationError::ProviderCompute {
                provider: provider.name().to_string(),
                source,
            }
        })
    }
}

impl Switchable for FailoverCoordinator {
    fn set_active(&self, provider: Arc<dyn RouteProvider>) {
        self.switch_active_provider(provider);
    }
}
