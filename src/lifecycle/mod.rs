//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build providers → Wire monitor → Spawn monitor
//!
//! Shutdown (shutdown.rs):
//!     Trigger → Loops exit at their next boundary → Join
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then providers, then the monitor
//! - Ordered shutdown: stop the monitor and join it before exit

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{Shutdown, ShutdownSignal};
pub use startup::{build, NavSystem, StartupError};
