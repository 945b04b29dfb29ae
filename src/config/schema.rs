//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the navigator.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use crate::routing::Location;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct NavConfig {
    /// Liveness monitor settings.
    pub monitor: MonitorConfig,

    /// Health probe selection.
    pub probe: ProbeConfig,

    /// Route provider definitions.
    pub providers: ProvidersConfig,

    /// Which providers to use before and after loss.
    pub failover: FailoverConfig,

    /// Demo drive settings.
    pub navigation: NavigationConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Liveness monitor configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Run the monitor loop at all.
    pub enabled: bool,

    /// Wait between probes in milliseconds.
    pub interval_ms: u64,

    /// Consecutive failed probes before the source is declared lost.
    pub missed_threshold: u32,

    /// Consecutive successful probes while lost before it is restored.
    pub restore_threshold: u32,
}

impl MonitorConfig {
    /// Wait between probes, never shorter than 1 ms.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: 1000,
            missed_threshold: 3,
            restore_threshold: 1,
        }
    }
}

/// Which probe implementation backs the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeKind {
    /// Random outcome with `success_rate`.
    Simulated,
    AlwaysUp,
    AlwaysDown,
}

/// Health probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub kind: ProbeKind,

    /// Probability of a successful simulated probe (0.0 - 1.0).
    pub success_rate: f64,

    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            kind: ProbeKind::Simulated,
            success_rate: 0.7,
            seed: None,
        }
    }
}

/// Routing strategy behind a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Waypoint,
    Graph,
}

/// A single route provider.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Unique provider name, stamped on its routes.
    pub name: String,

    /// Routing strategy (default: waypoint).
    #[serde(default = "default_strategy")]
    pub strategy: StrategyKind,
}

fn default_strategy() -> StrategyKind {
    StrategyKind::Waypoint
}

/// Provider list; `[[providers.source]]` tables in TOML.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub source: Vec<ProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            source: vec![
                ProviderConfig { name: "cellular".to_string(), strategy: StrategyKind::Waypoint },
                ProviderConfig { name: "cache".to_string(), strategy: StrategyKind::Waypoint },
            ],
        }
    }
}

/// Failover policy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FailoverConfig {
    /// Provider active at startup and after restoration.
    pub primary: String,

    /// Provider used while the primary is lost.
    pub fallback: String,
}

impl Default for FailoverConfig {
    fn default() -> Self {
        Self {
            primary: "cellular".to_string(),
            fallback: "cache".to_string(),
        }
    }
}

/// Demo drive configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub origin: Location,

    /// Also the implicit destination of update requests.
    pub destination: Location,

    /// Time between update requests in milliseconds.
    pub update_interval_ms: u64,

    /// Number of update requests along the way.
    pub updates: u32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            origin: Location::new(43.1566, -77.6088),      // Rochester
            destination: Location::new(40.7128, -74.0060), // NYC
            update_interval_ms: 5000,
            updates: 12,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_never_zero() {
        let config = MonitorConfig { interval_ms: 0, ..MonitorConfig::default() };
        assert_eq!(config.interval(), Duration::from_millis(1));
        assert_eq!(MonitorConfig::default().interval(), Duration::from_secs(1));
    }
}
