//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! health, failover and routing produce:
//!     → tracing events (logging.rs installs the subscriber)
//!     → metrics.rs (counters, gauges)
//! ```
//!
//! # Design Decisions
//! - The core only emits events; formatting and export are subscriber concerns
//! - Structured fields, never preformatted strings

pub mod logging;
pub mod metrics;
