//! Prometheus metrics for record traffic.
//!
//! This module provides:
//! - Record creation and rejection counters
//! - Lookup outcome counters
//! - HTTP request latency

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::error::ServiceError;

// === Metric Name Constants ===

/// Records created counter metric name.
pub const METRIC_RECORDS_CREATED: &str = "records_created_total";
/// Records rejected counter metric name.
pub const METRIC_RECORDS_REJECTED: &str = "records_rejected_total";
/// Username lookups counter metric name.
pub const METRIC_RECORD_LOOKUPS: &str = "record_lookups_total";
/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";

/// Install the global Prometheus recorder and register metric descriptions.
/// Call this once at startup; the returned handle renders the scrape body.
pub fn install_recorder() -> Result<PrometheusHandle, ServiceError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    init_metrics();
    Ok(handle)
}

/// Register metric descriptions with the current recorder.
pub fn init_metrics() {
    describe_counter!(METRIC_RECORDS_CREATED, "Total number of records created");
    describe_counter!(
        METRIC_RECORDS_REJECTED,
        "Total number of record creations rejected, by reason"
    );
    describe_counter!(
        METRIC_RECORD_LOOKUPS,
        "Total number of username lookups, by outcome"
    );
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Increment records created counter.
pub fn inc_records_created() {
    counter!(METRIC_RECORDS_CREATED).increment(1);
}

/// Increment records rejected counter.
pub fn inc_records_rejected(reason: &'static str) {
    counter!(METRIC_RECORDS_REJECTED, "reason" => reason).increment(1);
}

/// Increment lookups counter with `found` or `missing`.
pub fn inc_record_lookups(found: bool) {
    let outcome = if found { "found" } else { "missing" };
    counter!(METRIC_RECORD_LOOKUPS, "outcome" => outcome).increment(1);
}

/// Record HTTP request latency.
pub fn record_http_latency(start: Instant, endpoint: &str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => endpoint.to_string()).record(latency_ms);
}

/// RAII guard for timing a request.
/// Records latency under its endpoint label when dropped.
pub struct LatencyTimer {
    start: Instant,
    endpoint: &'static str,
}

impl LatencyTimer {
    /// Start timing a request to `endpoint`.
    pub fn new(endpoint: &'static str) -> Self {
        Self {
            start: Instant::now(),
            endpoint,
        }
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        record_http_latency(self.start, self.endpoint);
    }
}
