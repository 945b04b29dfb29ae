//! Provider registry.
//!
//! # Responsibilities
//! - Build named providers from configuration
//! - Resolve provider names at wiring time
//!
//! Unknown names are rejected here, so a switch can never target a provider
//! that does not exist.

use std::collections::HashMap;
use std::sync::Arc;
use crate::config::{ProviderConfig, StrategyKind};
use crate::routing::{
    graph::GraphRouting, waypoint::WaypointRouting, DataSource, Location, RouteProvider,
    RoutingStrategy,
};

/// Name → provider map, immutable after startup.
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn RouteProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create one data source per config entry. Sources using the same
    /// strategy kind share a single strategy instance.
    pub fn from_config(configs: &[ProviderConfig], destination: Location) -> Self {
        let mut strategies: HashMap<StrategyKind, Arc<dyn RoutingStrategy>> = HashMap::new();
        let mut registry = Self::new();

        for config in configs {
            let strategy = strategies
                .entry(config.strategy)
                .or_insert_with(|| match config.strategy {
                    StrategyKind::Waypoint => {
                        Arc::new(WaypointRouting::new(destination)) as Arc<dyn RoutingStrategy>
                    }
                    StrategyKind::Graph => Arc::new(GraphRouting::new(destination)),
                })
                .clone();

            tracing::debug!(provider = %config.name, strategy = ?config.strategy, "Registered route provider");
            registry.insert(Arc::new(DataSource::new(config.name.clone(), strategy)));
        }

        registry
    }

    /// Register a provider under its own name, replacing any previous entry.
    pub fn insert(&mut self, provider: Arc<dyn RouteProvider>) {
        self.providers.insert(provider.name().to_string(), provider);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn RouteProvider>> {
        self.providers.get(name).cloned()
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
