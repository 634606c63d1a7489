//! Metrics collection and exposition.
//!
//! # Metrics
//! - `svg_resize_requests_total` (counter): requests by outcome (`ok` or error kind)
//! - `svg_resize_request_duration_seconds` (histogram): end-to-end latency
//! - `svg_resize_upstream_bytes` (histogram): size of fetched SVG bodies
//!
//! Without an installed recorder every call is a no-op, so tests and the
//! `resize` command pay nothing.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

pub const REQUESTS_TOTAL: &str = "svg_resize_requests_total";
pub const REQUEST_DURATION: &str = "svg_resize_request_duration_seconds";
pub const UPSTREAM_BYTES: &str = "svg_resize_upstream_bytes";

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one finished resize request.
pub fn record_request(outcome: &'static str, start: Instant) {
    ::metrics::counter!(REQUESTS_TOTAL, "outcome" => outcome).increment(1);
    ::metrics::histogram!(REQUEST_DURATION, "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_upstream_bytes(len: usize) {
    ::metrics::histogram!(UPSTREAM_BYTES).record(len as f64);
}
