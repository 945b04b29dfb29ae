//! Startup orchestration.
//!
//! # Responsibilities
//! - Build providers, coordinator, probe and monitor from configuration
//! - Resolve failover targets and wire the policy
//! - Start and stop the background monitor task
//!
//! # Design Decisions
//! - Fail fast: an unknown provider name is a startup error, not a switch error
//! - The primary provider is active from construction

use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use crate::config::NavConfig;
use crate::failover::{self, FailoverCoordinator, Switchable};
use crate::health::{probe, HealthProbe, LivenessMonitor};
use crate::routing::{ProviderRegistry, RouteProvider};

#[derive(Debug, Error)]
pub enum StartupError {
    /// A failover target names a provider that was never registered.
    #[error("{role} provider '{name}' is not registered")]
    UnknownProvider { role: &'static str, name: String },
}

/// Assembled navigation system.
pub struct NavSystem {
    pub registry: ProviderRegistry,
    pub coordinator: Arc<FailoverCoordinator>,
    pub monitor: Arc<LivenessMonitor>,
}

/// Build the system with the probe selected in `config`.
pub fn build(config: &NavConfig) -> Result<NavSystem, StartupError> {
    build_with_probe(config, probe::from_config(&config.probe))
}

/// Build the system around an explicit probe.
pub fn build_with_probe(
    config: &NavConfig,
    probe: Arc<dyn HealthProbe>,
) -> Result<NavSystem, StartupError> {
    let registry =
        ProviderRegistry::from_config(&config.providers.source, config.navigation.destination);

    tracing::info!(providers = ?registry.names(), "Route providers registered");

    let primary = resolve(&registry, "primary", &config.failover.primary)?;
    let fallback = resolve(&registry, "fallback", &config.failover.fallback)?;

    let coordinator = Arc::new(FailoverCoordinator::new(primary.clone()));

    let mut monitor = LivenessMonitor::new(probe, config.monitor.clone());
    let target: Arc<dyn Switchable> = coordinator.clone();
    failover::wire(&mut monitor, target, primary, fallback);

    Ok(NavSystem {
        registry,
        coordinator,
        monitor: Arc::new(monitor),
    })
}

fn resolve(
    registry: &ProviderRegistry,
    role: &'static str,
    name: &str,
) -> Result<Arc<dyn RouteProvider>, StartupError> {
    registry.get(name).ok_or_else(|| StartupError::UnknownProvider {
        role,
        name: name.to_string(),
    })
}

impl NavSystem {
    /// Run the monitor loop as a background task.
    pub fn spawn_monitor(&self) -> JoinHandle<()> {
        let monitor = self.monitor.clone();
        tokio::spawn(async move { monitor.start_monitoring().await })
    }

    /// Stop the monitor and wait for its task to exit.
    pub async fn stop_monitor(&self, handle: JoinHandle<()>) {
        self.monitor.stop_monitoring();
        if let Err(e) = handle.await {
            tracing::error!(error = %e, "Liveness monitor task failed");
        }
    }
}
