//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → NavConfig (validated, immutable)
//!     → lifecycle::startup builds the subsystems from it
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an empty file reproduces the demo
//! - Validation separates syntactic (serde) from semantic checks
//! - Provider names are checked here, before anything can switch to them

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::NavConfig;
pub use schema::MonitorConfig;
pub use schema::ProbeConfig;
pub use schema::ProbeKind;
pub use schema::ProviderConfig;
pub use schema::StrategyKind;
pub use schema::FailoverConfig;
pub use schema::NavigationConfig;
pub use schema::ObservabilityConfig;
pub use schema::LogFormat;
