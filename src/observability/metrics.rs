//! Metrics collection and exposition.
//!
//! # Metrics
//! - `lookup_requests_total` (counter): lookups by response status
//! - `lookup_request_duration_seconds` (histogram): handler latency by status

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must be called from within a Tokio runtime. Failure is logged, not fatal.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one completed lookup request.
pub fn record_lookup(status: u16, start: Instant) {
    let status = status.to_string();
    metrics::counter!("lookup_requests_total", "status" => status.clone()).increment(1);
    metrics::histogram!("lookup_request_duration_seconds", "status" => status)
        .record(start.elapsed().as_secs_f64());
}
