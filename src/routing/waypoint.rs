//! Waypoint routing strategy.

use std::time::Duration;
use crate::routing::{RoutingStrategy, types::Location};

/// Default destination for update requests (New York City).
pub const DEFAULT_DESTINATION: Location = Location::new(40.7128, -74.0060);

/// Flat-map routing straight through the given points.
#[derive(Debug, Clone)]
pub struct WaypointRouting {
    destination: Location,
}

impl WaypointRouting {
    pub const NAME: &'static str = "waypoint";

    pub fn new(destination: Location) -> Self {
        Self { destination }
    }
}

impl Default for WaypointRouting {
    fn default() -> Self {
        Self::new(DEFAULT_DESTINATION)
    }
}

impl RoutingStrategy for WaypointRouting {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn destination(&self) -> Location {
        self.destination
    }

    fn plan(&self, origin: Location, destination: Location) -> (Vec<Location>, Duration) {
        (vec![origin, destination], Duration::from_secs(310 * 60))
    }
}
