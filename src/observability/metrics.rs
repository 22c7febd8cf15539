//! Metrics collection and exposition.
//!
//! # Metrics
//! - `api_requests_total` (counter): requests by method, route, status
//! - `api_request_duration_seconds` (histogram): latency distribution

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
///
/// Failure to bind is logged, not fatal; the API keeps serving without a
/// scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install Prometheus exporter"),
    }
}

/// Record one completed API request.
pub fn record_request(method: &str, route: &'static str, status: u16, start: Instant) {
    metrics::counter!(
        "api_requests_total",
        "method" => method.to_string(),
        "route" => route,
        "status" => status.to_string(),
    )
    .increment(1);
    metrics::histogram!(
        "api_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route,
    )
    .record(start.elapsed().as_secs_f64());
}
