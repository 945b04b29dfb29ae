//! Metrics collection.
//!
//! # Metrics
//! - `nav_probe_total` (counter): probes by result
//! - `nav_liveness_state` (gauge): 1=healthy, 0=lost
//! - `nav_liveness_missed` (gauge): current missed heartbeat count
//! - `nav_provider_switch_total` (counter): activations by provider
//! - `nav_route_requests_total` (counter): route requests by provider, op, result
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; without an installed recorder
//!   every call is a no-op

use crate::health::LivenessState;

pub fn record_probe(success: bool, missed: u32, state: LivenessState) {
    let result = if success { "success" } else { "failure" };
    metrics::counter!("nav_probe_total", "result" => result).increment(1);
    metrics::gauge!("nav_liveness_missed").set(missed as f64);
    let healthy = if state == LivenessState::Healthy { 1.0 } else { 0.0 };
    metrics::gauge!("nav_liveness_state").set(healthy);
}

pub fn record_active_provider(provider: &str) {
    metrics::counter!("nav_provider_switch_total", "provider" => provider.to_string()).increment(1);
}

pub fn record_route_request(provider: &str, op: &'static str, success: bool) {
    let result = if success { "ok" } else { "error" };
    metrics::counter!(
        "nav_route_requests_total",
        "provider" => provider.to_string(),
        "op" => op,
        "result" => result
    )
    .increment(1);
}
