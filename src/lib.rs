//! Connectivity-aware route source failover.
//!
//! A liveness monitor probes the primary data source; when heartbeats are
//! lost the failover coordinator swaps route requests to a fallback source,
//! and swaps back once the primary is restored.

pub mod config;
pub mod routing;
pub mod health;
pub mod failover;
pub mod lifecycle;
pub mod observability;

pub use config::schema::NavConfig;
pub use failover::{FailoverCoordinator, NavigationError, Switchable};
pub use health::{HealthProbe, LivenessMonitor, LivenessState};
pub use lifecycle::Shutdown;
pub use routing::{Location, Route, RouteProvider};
