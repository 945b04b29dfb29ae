//! Health probes.
//!
//! # Responsibilities
//! - Perform one liveness check per call
//! - Report success or a failure reason
//!
//! # Design Decisions
//! - Probes are synchronous: a check is never suspended half way
//! - A panicking probe is caught by [`run_probe`] and reported as a failure

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use crate::config::{ProbeConfig, ProbeKind};

/// Why a single check did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// No heartbeat arrived for this tick.
    #[error("no heartbeat received")]
    Missed,

    /// The probe panicked.
    #[error("probe panicked: {0}")]
    Panicked(String),
}

/// One liveness check against the primary data source.
pub trait HealthProbe: Send + Sync {
    fn name(&self) -> &str;

    fn check(&self) -> Result<(), ProbeError>;
}

/// Run a probe, turning a panic into [`ProbeError::Panicked`].
pub fn run_probe(probe: &dyn HealthProbe) -> Result<(), ProbeError> {
    panic::catch_unwind(AssertUnwindSafe(|| probe.check()))
        .unwrap_or_else(|payload| Err(ProbeError::Panicked(panic_message(payload.as_ref()))))
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Build the probe selected in configuration.
pub fn from_config(config: &ProbeConfig) -> Arc<dyn HealthProbe> {
    match config.kind {
        ProbeKind::Simulated => Arc::new(SimulatedProbe::new(config.success_rate, config.seed)),
        ProbeKind::AlwaysUp => Arc::new(StaticProbe::up()),
        ProbeKind::AlwaysDown => Arc::new(StaticProbe::down()),
    }
}

/// Random heartbeat, standing in for network issues or server downtime.
#[derive(Debug)]
pub struct SimulatedProbe {
    success_rate: f64,
    rng: Mutex<StdRng>,
}

impl SimulatedProbe {
    pub fn new(success_rate: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            success_rate: success_rate.clamp(0.0, 1.0),
            rng: Mutex::new(rng),
        }
    }
}

impl HealthProbe for SimulatedProbe {
    fn name(&self) -> &str {
        "simulated"
    }

    fn check(&self) -> Result<(), ProbeError> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if rng.gen_bool(self.success_rate) {
            Ok(())
        } else {
            Err(ProbeError::Missed)
        }
    }
}

/// Probe with a fixed outcome.
#[derive(Debug, Clone, Copy)]
pub struct StaticProbe {
    up: bool,
}

impl StaticProbe {
    pub fn up() -> Self {
        Self { up: true }
    }

    pub fn down() -> Self {
        Self { up: false }
    }
}

impl HealthProbe for StaticProbe {
    fn name(&self) -> &str {
        if self.up {
            "always_up"
        } else {
            "always_down"
        }
    }

    fn check(&self) -> Result<(), ProbeError> {
        if self.up {
            Ok(())
        } else {
            Err(ProbeError::Missed)
        }
    }
}
