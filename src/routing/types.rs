//! Route value types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A point on the map in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Finite and within the WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Point at fraction `t` of the straight line from `self` to `other`.
    pub fn lerp(&self, other: Location, t: f64) -> Location {
        Location {
            latitude: self.latitude + (other.latitude - self.latitude) * t,
            longitude: self.longitude + (other.longitude - self.longitude) * t,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A computed route. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    source: String,
    waypoints: Vec<Location>,
    estimated_travel_time: Duration,
}

impl Route {
    pub fn new(source: impl Into<String>, waypoints: Vec<Location>, estimated_travel_time: Duration) -> Self {
        Self {
            source: source.into(),
            waypoints,
            estimated_travel_time,
        }
    }

    /// Name of the provider that produced this route.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn waypoints(&self) -> &[Location] {
        &self.waypoints
    }

    pub fn estimated_travel_time(&self) -> Duration {
        self.estimated_travel_time
    }

    /// Travel time in whole minutes, as shown to drivers.
    pub fn estimated_minutes(&self) -> u64 {
        self.estimated_travel_time.as_secs() / 60
    }
}
