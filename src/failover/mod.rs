//! Failover subsystem.
//!
//! # Data Flow
//! ```text
//! LivenessMonitor edge
//!     → handler registered by wire()
//!     → Switchable::set_active(fallback | primary)
//!     → coordinator.rs swaps the active provider
//!     → next route request goes to the new provider
//! ```
//!
//! # Design Decisions
//! - The monitor only ever sees a `Switchable`, never providers' internals
//! - Policy lives in the handlers, so new policies need no monitor changes
//! - Switch targets are resolved before wiring; nothing is looked up at switch time

pub mod coordinator;

use std::sync::Arc;
use crate::health::LivenessMonitor;
use crate::routing::RouteProvider;

pub use coordinator::{FailoverCoordinator, NavigationError};

/// Something whose active route provider can be replaced.
pub trait Switchable: Send + Sync {
    fn set_active(&self, provider: Arc<dyn RouteProvider>);
}

/// Register the primary/fallback policy on `monitor`:
/// lost → `fallback`, restored → `primary`.
pub fn wire(
    monitor: &mut LivenessMonitor,
    target: Arc<dyn Switchable>,
    primary: Arc<dyn RouteProvider>,
    fallback: Arc<dyn RouteProvider>,
) {
    tracing::debug!(primary = primary.name(), fallback = fallback.name(), "Wiring failover policy");

    let on_lost = target.clone();
    monitor.on_lost(move || on_lost.set_active(fallback.clone()));
    monitor.on_restored(move || target.set_active(primary.clone()));
}
