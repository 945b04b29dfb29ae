//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! FailoverCoordinator (active provider)
//!     → source.rs (named DataSource, validates coordinates)
//!     → strategy (waypoint.rs / graph.rs)
//!     → Return: Route labeled with the source name, or RouteError
//!
//! Provider Registration (at startup):
//!     ProviderConfig[]
//!     → registry.rs (name → provider)
//!     → Freeze as immutable ProviderRegistry
//! ```
//!
//! # Design Decisions
//! - Providers are opaque `Arc<dyn RouteProvider>` handles
//! - Strategies are shared between sources; sources own the label
//! - Coordinate validation belongs to providers, not the coordinator

pub mod graph;
pub mod registry;
pub mod source;
pub mod types;
pub mod waypoint;

use thiserror::Error;

pub use registry::ProviderRegistry;
pub use source::DataSource;
pub use types::{Location, Route};

/// Errors a provider can report for a single route request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// Coordinates outside [-90, 90] / [-180, 180] or not finite.
    #[error("invalid location ({latitude}, {longitude})")]
    InvalidLocation { latitude: f64, longitude: f64 },

    /// The provider could not produce a route.
    #[error("route unavailable: {0}")]
    Unavailable(String),
}

/// A source of routes.
///
/// Implementations must be safe to call concurrently and must never return a
/// route for invalid input without reporting it.
pub trait RouteProvider: Send + Sync {
    /// Label stamped on every route this provider produces.
    fn name(&self) -> &str;

    /// Compute a route between two points.
    fn compute_route(&self, origin: Location, destination: Location) -> Result<Route, RouteError>;

    /// Recompute from the current position towards the provider's established destination.
    fn update_route(&self, current: Location) -> Result<Route, RouteError>;
}

/// Route computation strategy shared by data sources.
pub trait RoutingStrategy: Send + Sync {
    fn name(&self) -> &str;

    /// Destination used by [`RoutingStrategy::update_route`].
    fn destination(&self) -> Location;

    /// Returns the waypoints and travel time for a leg.
    fn plan(&self, origin: Location, destination: Location) -> (Vec<Location>, std::time::Duration);
}
