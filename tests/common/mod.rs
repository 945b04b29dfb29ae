//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use nav_failover::health::ProbeError;
use nav_failover::routing::RouteError;
use nav_failover::{HealthProbe, LivenessMonitor, Location, Route, RouteProvider};

pub const ROCHESTER: Location = Location::new(43.1566, -77.6088);
pub const NYC: Location = Location::new(40.7128, -74.0060);

/// Probe that replays a fixed list of outcomes, then keeps returning `tail`.
pub struct ScriptedProbe {
    outcomes: Mutex<VecDeque<bool>>,
    tail: bool,
    calls: AtomicUsize,
}

impl ScriptedProbe {
    pub fn new(outcomes: &[bool], tail: bool) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.iter().copied().collect()),
            tail,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HealthProbe for ScriptedProbe {
    fn name(&self) -> &str {
        "scripted"
    }

    fn check(&self) -> Result<(), ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let ok = self.outcomes.lock().unwrap().pop_front().unwrap_or(self.tail);
        if ok {
            Ok(())
        } else {
            Err(ProbeError::Missed)
        }
    }
}

/// Lost/restored counters attached to a monitor.
#[derive(Clone, Default)]
pub struct EventCounts {
    pub lost: Arc<AtomicUsize>,
    pub restored: Arc<AtomicUsize>,
}

impl EventCounts {
    pub fn attach(monitor: &mut LivenessMonitor) -> Self {
        let counts = Self::default();
        let lost = counts.lost.clone();
        let restored = counts.restored.clone();
        monitor.on_lost(move || {
            lost.fetch_add(1, Ordering::SeqCst);
        });
        monitor.on_restored(move || {
            restored.fetch_add(1, Ordering::SeqCst);
        });
        counts
    }

    pub fn lost(&self) -> usize {
        self.lost.load(Ordering::SeqCst)
    }

    pub fn restored(&self) -> usize {
        self.restored.load(Ordering::SeqCst)
    }
}

/// Provider whose routes carry a provider-specific travel time, so a result
/// can be attributed entirely to one provider.
pub struct TaggedProvider {
    name: String,
    minutes: u64,
}

impl TaggedProvider {
    pub fn new(name: &str, minutes: u64) -> Arc<Self> {
        Arc::new(Self { name: name.to_string(), minutes })
    }
}

impl RouteProvider for TaggedProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn compute_route(&self, origin: Location, destination: Location) -> Result<Route, RouteError> {
        Ok(Route::new(
            self.name.clone(),
            vec![origin, destination],
            Duration::from_secs(self.minutes * 60),
        ))
    }

    fn update_route(&self, current: Location) -> Result<Route, RouteError> {
        self.compute_route(current, NYC)
    }
}

/// Provider that always fails.
pub struct BrokenProvider;

impl RouteProvider for BrokenProvider {
    fn name(&self) -> &str {
        "broken"
    }

    fn compute_route(&self, _: Location, _: Location) -> Result<Route, RouteError> {
        Err(RouteError::Unavailable("map tiles missing".into()))
    }

    fn update_route(&self, _: Location) -> Result<Route, RouteError> {
        Err(RouteError::Unavailable("map tiles missing".into()))
    }
}
