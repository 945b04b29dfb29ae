//! nav-failover demo
//!
//! Drives a simulated trip from Rochester to New York while a liveness
//! monitor decides whether routes come from the cellular or the cached
//! data source.
//!
//! ```text
//!   ┌──────────────┐  lost / restored   ┌──────────────────────┐
//!   │   liveness   │───────────────────▶│ failover coordinator │
//!   │   monitor    │   (Switchable)     │   active provider    │
//!   └──────┬───────┘                    └──────────┬───────────┘
//!          │ probe                                 │ route requests
//!          ▼                                       ▼
//!   ┌──────────────┐                    ┌──────────────────────┐
//!   │ health probe │                    │ cellular │  cache    │
//!   └──────────────┘                    └──────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;

use nav_failover::config::loader::load_config;
use nav_failover::config::NavigationConfig;
use nav_failover::lifecycle::{self, signals, ShutdownSignal};
use nav_failover::observability::logging::init_logging;
use nav_failover::{FailoverCoordinator, NavConfig, Shutdown};

#[derive(Parser)]
#[command(name = "nav-failover")]
#[command(about = "Navigation with heartbeat-driven data source failover", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of navigation updates.
    #[arg(short, long)]
    updates: Option<u32>,

    /// Override the log level.
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => NavConfig::default(),
    };
    if let Some(updates) = cli.updates {
        config.navigation.updates = updates;
    }
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }

    init_logging(&config.observability)?;
    tracing::info!("nav-failover v{} starting", env!("CARGO_PKG_VERSION"));

    let system = lifecycle::build(&config)?;
    let monitor_task = system.spawn_monitor();

    let shutdown = Arc::new(Shutdown::new());
    let interrupt = {
        let shutdown = shutdown.clone();
        tokio::spawn(async move { signals::wait_for_interrupt(&shutdown).await })
    };

    drive(&system.coordinator, &config.navigation, shutdown.subscribe()).await;

    interrupt.abort();
    system.stop_monitor(monitor_task).await;

    tracing::info!(
        ticks = system.monitor.ticks(),
        active = %system.coordinator.active_name(),
        "Shutdown complete"
    );
    Ok(())
}

/// Navigate once, then update along the straight line to the destination.
async fn drive(coordinator: &FailoverCoordinator, nav: &NavigationConfig, mut stop: ShutdownSignal) {
    if let Err(e) = coordinator.navigate(nav.origin, nav.destination) {
        tracing::error!(error = %e, "Initial navigation failed");
    }

    let interval = Duration::from_millis(nav.update_interval_ms);
    for i in 0..nav.updates {
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = stop.wait() => {
                tracing::info!(completed = i, "Trip interrupted");
                return;
            }
        }

        let current = nav.origin.lerp(nav.destination, f64::from(i) / f64::from(nav.updates));
        if let Err(e) = coordinator.update_navigation(current) {
            tracing::error!(error = %e, "Navigation update failed");
        }
    }
}
