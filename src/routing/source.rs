//! Named data sources.
//!
//! # Responsibilities
//! - Give a routing strategy a provider identity ("cellular", "cache", ...)
//! - Reject coordinates the strategy cannot route
//! - Stamp the source name on every route

use std::sync::Arc;
use crate::routing::{Location, Route, RouteError, RouteProvider, RoutingStrategy};

/// A route provider backed by a shared routing strategy.
#[derive(Clone)]
pub struct DataSource {
    name: String,
    strategy: Arc<dyn RoutingStrategy>,
}

impl DataSource {
    pub fn new(name: impl Into<String>, strategy: Arc<dyn RoutingStrategy>) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }
}

impl std::fmt::Debug for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataSource")
            .field("name", &self.name)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

fn ensure_valid(location: Location) -> Result<Location, RouteError> {
    if location.is_valid() {
        Ok(location)
    } else {
        Err(RouteError::InvalidLocation {
            latitude: location.latitude,
            longitude: location.longitude,
        })
    }
}

impl RouteProvider for DataSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn compute_route(&self, origin: Location, destination: Location) -> Result<Route, RouteError> {
        let origin = ensure_valid(origin)?;
        let destination = ensure_valid(destination)?;
        let (waypoints, eta) = self.strategy.plan(origin, destination);
        Ok(Route::new(self.name.clone(), waypoints, eta))
    }

    fn update_route(&self, current: Location) -> Result<Route, RouteError> {
        self.compute_route(current, self.strategy.destination())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::waypoint::{WaypointRouting, DEFAULT_DESTINATION};

    fn cellular() -> DataSource {
        DataSource::new("cellular", Arc::new(WaypointRouting::default()))
    }

    #[test]
    fn test_route_labeled_with_source_name() {
        let origin = Location::new(43.1566, -77.6088);
        let route = cellular().compute_route(origin, DEFAULT_DESTINATION).unwrap();
        assert_eq!(route.source(), "cellular");
        assert_eq!(route.waypoints(), &[origin, DEFAULT_DESTINATION]);
    }

    #[test]
    fn test_update_routes_to_strategy_destination() {
        let current = Location::new(42.0, -76.0);
        let route = cellular().update_route(current).unwrap();
        assert_eq!(route.waypoints().last(), Some(&DEFAULT_DESTINATION));
    }

    #[test]
    fn test_invalid_location_rejected() {
        let err = cellular()
            .compute_route(Location::new(123.0, 0.0), DEFAULT_DESTINATION)
            .unwrap_err();
        assert!(matches!(err, RouteError::InvalidLocation { latitude, .. } if latitude == 123.0));
    }
}
