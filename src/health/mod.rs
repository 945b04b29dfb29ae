//! Health checking subsystem.
//!
//! # Data Flow
//! ```text
//! Liveness monitor (monitor.rs):
//!     Periodic timer
//!     → Probe the primary source (probe.rs)
//!     → Update state.rs
//!     → On an edge, run lost/restored handlers
//!
//! State machine (state.rs):
//!     Healthy ←→ Lost
//!     Debounced on the way down, single success on the way up
//! ```
//!
//! # Design Decisions
//! - The monitor knows nothing about providers; handlers decide the policy
//! - Probe errors and panics count as missed heartbeats
//! - Handlers are isolated from each other and from the loop

pub mod monitor;
pub mod probe;
pub mod state;

pub use monitor::LivenessMonitor;
pub use probe::{HealthProbe, ProbeError};
pub use state::LivenessState;
