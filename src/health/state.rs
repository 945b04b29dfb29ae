//! Liveness state machine.
//!
//! # States
//! - Healthy: primary source in use
//! - Lost: primary source presumed unreachable
//!
//! # State Transitions
//! ```text
//! Healthy → Lost:    consecutive failures >= missed_threshold
//! Lost → Healthy:    consecutive successes >= restore_threshold (default 1)
//! ```
//!
//! # Design Decisions
//! - Loss is debounced, restoration is fast
//! - Transitions are reported once, at the edge
//! - The missed counter keeps counting while Lost

/// Perceived availability of the primary source.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LivenessState {
    #[default]
    Healthy = 0,
    Lost = 1,
}

impl From<u8> for LivenessState {
    fn from(val: u8) -> Self {
        match val {
            1 => LivenessState::Lost,
            _ => LivenessState::Healthy,
        }
    }
}

/// Edge reported by [`LivenessTracker::record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Lost,
    Restored,
}

/// Debounced liveness tracking for a single source.
#[derive(Debug, Clone)]
pub struct LivenessTracker {
    state: LivenessState,
    missed: u32,
    recovered: u32,
    missed_threshold: u32,
    restore_threshold: u32,
}

impl LivenessTracker {
    pub fn new(missed_threshold: u32, restore_threshold: u32) -> Self {
        Self {
            state: LivenessState::Healthy,
            missed: 0,
            recovered: 0,
            missed_threshold: missed_threshold.max(1),
            restore_threshold: restore_threshold.max(1),
        }
    }

    /// Record one probe outcome, returning the transition it caused, if any.
    pub fn record(&mut self, success: bool) -> Option<Transition> {
        if success {
            self.missed = 0;
        } else {
            self.missed = self.missed.saturating_add(1);
            self.recovered = 0;
        }

        if self.missed >= self.missed_threshold && self.state == LivenessState::Healthy {
            self.state = LivenessState::Lost;
            return Some(Transition::Lost);
        }

        if self.state == LivenessState::Lost && success {
            self.recovered += 1;
            if self.recovered >= self.restore_threshold {
                self.state = LivenessState::Healthy;
                self.recovered = 0;
                return Some(Transition::Restored);
            }
        }

        None
    }

    pub fn state(&self) -> LivenessState {
        self.state
    }

    pub fn missed(&self) -> u32 {
        self.missed
    }
}
