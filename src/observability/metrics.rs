//! Gate metrics.
//!
//! # Metrics
//! - `gate_requests_throttled_total` (counter): requests rejected with 429
//! - `gate_panics_recovered_total` (counter): faults caught at the boundary
//! - `gate_clients_evicted_total` (counter): registry entries swept

use metrics::counter;

pub fn record_request_throttled() {
    counter!("gate_requests_throttled_total").increment(1);
}

pub fn record_panic_recovered() {
    counter!("gate_panics_recovered_total").increment(1);
}

pub fn record_clients_evicted(count: usize) {
    counter!("gate_clients_evicted_total").increment(count as u64);
}
