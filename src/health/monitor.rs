//! Liveness monitoring.
//!
//! # Responsibilities
//! - Periodically probe the primary data source
//! - Debounce failures through the [`LivenessTracker`]
//! - Fire lost/restored handlers on state edges

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;
use tokio::time::{self, Instant, MissedTickBehavior};
use crate::config::MonitorConfig;
use crate::health::probe::{panic_message, run_probe, HealthProbe, ProbeError};
use crate::health::state::{LivenessState, LivenessTracker, Transition};
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

type Handler = Box<dyn Fn() + Send + Sync>;

pub struct LivenessMonitor {
    probe: Arc<dyn HealthProbe>,
    config: MonitorConfig,
    on_lost: Vec<Handler>,
    on_restored: Vec<Handler>,
    shutdown: Shutdown,
    running: AtomicBool,

    // Diagnostics mirrored from the loop's tracker.
    state: AtomicU8,
    missed: AtomicU32,
    ticks: AtomicU64,
}

impl LivenessMonitor {
    pub fn new(probe: Arc<dyn HealthProbe>, config: MonitorConfig) -> Self {
        Self {
            probe,
            config,
            on_lost: Vec::new(),
            on_restored: Vec::new(),
            shutdown: Shutdown::new(),
            running: AtomicBool::new(false),
            state: AtomicU8::new(LivenessState::Healthy as u8),
            missed: AtomicU32::new(0),
            ticks: AtomicU64::new(0),
        }
    }

    /// Register a handler for Healthy → Lost. Handlers run in registration order.
    pub fn on_lost<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_lost.push(Box::new(handler));
        self
    }

    /// Register a handler for Lost → Healthy. Handlers run in registration order.
    pub fn on_restored<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_restored.push(Box::new(handler));
        self
    }

    /// One check against the probe. Does not touch monitor state.
    pub fn heart_beat(&self) -> bool {
        run_probe(self.probe.as_ref()).is_ok()
    }

    /// Run the probe loop until [`LivenessMonitor::stop_monitoring`] is called.
    ///
    /// Each iteration waits one interval, then probes. A stop request is
    /// honored at the next iteration boundary; a probe in progress always
    /// completes. Once stopped, the monitor cannot be restarted.
    pub async fn start_monitoring(&self) {
        if !self.config.enabled {
            tracing::info!("Liveness monitor disabled");
            return;
        }

        if self.running.swap(true, Ordering::AcqRel) {
            tracing::warn!("Liveness monitor already running, ignoring second start");
            return;
        }

        let mut stop = self.shutdown.subscribe();
        if stop.is_triggered() {
            tracing::debug!("Liveness monitor stopped before start");
            self.running.store(false, Ordering::Release);
            return;
        }

        tracing::info!(
            interval_ms = self.config.interval_ms,
            missed_threshold = self.config.missed_threshold,
            restore_threshold = self.config.restore_threshold,
            probe = self.probe.name(),
            "Liveness monitor started"
        );

        let interval = self.config.interval();
        let mut ticker = time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut tracker =
            LivenessTracker::new(self.config.missed_threshold, self.config.restore_threshold);

        loop {
            tokio::select! {
                biased;
                _ = stop.wait() => {
                    break;
                }
                _ = ticker.tick() => {
                    if stop.is_triggered() {
                        break;
                    }
                    self.tick(&mut tracker);
                }
            }
        }

        self.running.store(false, Ordering::Release);
        tracing::info!(ticks = self.ticks(), "Liveness monitor stopped");
    }

    /// Request loop termination. Idempotent and callable from any thread.
    pub fn stop_monitoring(&self) {
        if self.shutdown.trigger() {
            tracing::debug!("Liveness monitor stop requested");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn state(&self) -> LivenessState {
        LivenessState::from(self.state.load(Ordering::Acquire))
    }

    pub fn missed_count(&self) -> u32 {
        self.missed.load(Ordering::Acquire)
    }

    /// Number of completed probe iterations.
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Acquire)
    }

    fn tick(&self, tracker: &mut LivenessTracker) {
        let result = run_probe(self.probe.as_ref());
        let success = result.is_ok();
        let transition = tracker.record(success);

        self.missed.store(tracker.missed(), Ordering::Release);
        self.state.store(tracker.state() as u8, Ordering::Release);
        self.ticks.fetch_add(1, Ordering::AcqRel);

        match &result {
            Ok(()) => tracing::debug!("Heartbeat check successful"),
            Err(ProbeError::Missed) => {
                tracing::warn!(missed = tracker.missed(), "No heartbeat received")
            }
            Err(e) => {
                tracing::warn!(missed = tracker.missed(), error = %e, "Heartbeat check failed")
            }
        }
        metrics::record_probe(success, tracker.missed(), tracker.state());

        match transition {
            Some(Transition::Lost) => {
                tracing::warn!(missed = tracker.missed(), "Heartbeat lost");
                self.fire("lost", &self.on_lost);
            }
            Some(Transition::Restored) => {
                tracing::info!("Heartbeat restored");
                self.fire("restored", &self.on_restored);
            }
            None => {}
        }
    }

    fn fire(&self, event: &'static str, handlers: &[Handler]) {
        for (index, handler) in handlers.iter().enumerate() {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| handler())) {
                tracing::error!(
                    event,
                    handler = index,
                    panic = %panic_message(payload.as_ref()),
                    "Liveness handler panicked, continuing"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    struct Scripted(Mutex<VecDeque<bool>>);

    impl Scripted {
        fn new(outcomes: &[bool]) -> Arc<Self> {
            Arc::new(Self(Mutex::new(outcomes.iter().copied().collect())))
        }
    }

    impl HealthProbe for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn check(&self) -> Result<(), ProbeError> {
            match self.0.lock().unwrap().pop_front() {
                Some(true) | None => Ok(()),
                Some(false) => Err(ProbeError::Missed),
            }
        }
    }

    fn counting(monitor: &mut LivenessMonitor) -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let lost = Arc::new(AtomicUsize::new(0));
        let restored = Arc::new(AtomicUsize::new(0));
        let l = lost.clone();
        let r = restored.clone();
        monitor.on_lost(move || {
            l.fetch_add(1, Ordering::SeqCst);
        });
        monitor.on_restored(move || {
            r.fetch_add(1, Ordering::SeqCst);
        });
        (lost, restored)
    }

    fn run_ticks(monitor: &LivenessMonitor, n: usize) -> Vec<u32> {
        let mut tracker = LivenessTracker::new(
            monitor.config.missed_threshold,
            monitor.config.restore_threshold,
        );
        (0..n)
            .map(|_| {
                monitor.tick(&mut tracker);
                monitor.missed_count()
            })
            .collect()
    }

    #[test]
    fn test_missed_count_and_single_lost() {
        let probe = Scripted::new(&[false, true, false, false, false]);
        let mut monitor = LivenessMonitor::new(probe, MonitorConfig::default());
        let (lost, restored) = counting(&mut monitor);

        let missed = run_ticks(&monitor, 5);

        assert_eq!(missed, vec![1, 0, 1, 2, 3]);
        assert_eq!(lost.load(Ordering::SeqCst), 1);
        assert_eq!(restored.load(Ordering::SeqCst), 0);
        assert_eq!(monitor.state(), LivenessState::Lost);
        assert_eq!(monitor.ticks(), 5);
    }

    #[test]
    fn test_handlers_run_in_order_and_survive_panics() {
        let probe = Scripted::new(&[false]);
        let config = MonitorConfig { missed_threshold: 1, ..MonitorConfig::default() };
        let mut monitor = LivenessMonitor::new(probe, config);

        let order = Arc::new(Mutex::new(Vec::new()));
        let o1 = order.clone();
        let o3 = order.clone();
        monitor
            .on_lost(move || o1.lock().unwrap().push(1))
            .on_lost(|| panic!("handler bug"))
            .on_lost(move || o3.lock().unwrap().push(3));

        run_ticks(&monitor, 1);

        assert_eq!(*order.lock().unwrap(), vec![1, 3]);
        assert_eq!(monitor.state(), LivenessState::Lost);
    }

    #[test]
    fn test_heart_beat_is_pass_through() {
        let probe = Scripted::new(&[false, true]);
        let monitor = LivenessMonitor::new(probe, MonitorConfig::default());

        assert!(!monitor.heart_beat());
        assert!(monitor.heart_beat());
        assert_eq!(monitor.missed_count(), 0);
        assert_eq!(monitor.ticks(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_before_start_returns_immediately() {
        let monitor = LivenessMonitor::new(Scripted::new(&[]), MonitorConfig::default());
        monitor.stop_monitoring();
        monitor.stop_monitoring();

        monitor.start_monitoring().await;
        assert_eq!(monitor.ticks(), 0);
        assert!(!monitor.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_monitor_does_not_tick() {
        let config = MonitorConfig { enabled: false, ..MonitorConfig::default() };
        let monitor = LivenessMonitor::new(Scripted::new(&[]), config);

        monitor.start_monitoring().await;
        assert_eq!(monitor.ticks(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_interval_runs_at_one_millisecond() {
        let config = MonitorConfig { interval_ms: 0, ..MonitorConfig::default() };
        let monitor = Arc::new(LivenessMonitor::new(Scripted::new(&[]), config));
        let start = Instant::now();
        let task = {
            let monitor = monitor.clone();
            tokio::spawn(async move { monitor.start_monitoring().await })
        };

        time::sleep_until(start + std::time::Duration::from_micros(10_500)).await;
        assert_eq!(monitor.ticks(), 10);

        monitor.stop_monitoring();
        task.await.expect("monitor task must not panic");
    }
}
