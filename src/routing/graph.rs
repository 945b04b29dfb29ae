//! Graph routing strategy.
//!
//! Stands in for a road-graph search; returns the direct leg with a fixed
//! estimate.

use std::time::Duration;
use crate::routing::{RoutingStrategy, types::Location, waypoint::DEFAULT_DESTINATION};

#[derive(Debug, Clone)]
pub struct GraphRouting {
    destination: Location,
}

impl GraphRouting {
    pub const NAME: &'static str = "graph";

    pub fn new(destination: Location) -> Self {
        Self { destination }
    }
}

impl Default for GraphRouting {
    fn default() -> Self {
        Self::new(DEFAULT_DESTINATION)
    }
}

impl RoutingStrategy for GraphRouting {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn destination(&self) -> Location {
        self.destination
    }

    fn plan(&self, origin: Location, destination: Location) -> (Vec<Location>, Duration) {
        (vec![origin, destination], Duration::from_secs(300 * 60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_is_faster_than_waypoint() {
        use crate::routing::waypoint::WaypointRouting;

        let origin = Location::new(43.1566, -77.6088);
        let (_, graph_eta) = GraphRouting::default().plan(origin, DEFAULT_DESTINATION);
        let (_, waypoint_eta) = WaypointRouting::default().plan(origin, DEFAULT_DESTINATION);
        assert!(graph_eta < waypoint_eta);
    }
}
