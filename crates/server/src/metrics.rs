//! Application metrics for Prometheus monitoring.
//!
//! - Prometheus recorder initialization
//! - Metric definitions
//! - Helpers for recording analyses and API requests

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

/// Global Prometheus handle for rendering metrics.
static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the Prometheus metrics recorder.
///
/// Call once at startup, before any metrics are recorded.
/// Returns `true` if this call installed the recorder, `false` if it was
/// already initialized.
pub fn init_metrics() -> bool {
    let mut installed = false;
    PROMETHEUS_HANDLE.get_or_init(|| {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        if metrics::set_global_recorder(recorder).is_err() {
            tracing::warn!("Failed to set global metrics recorder (already set)");
        } else {
            describe_metrics();
            installed = true;
        }
        handle
    });

    if installed {
        tracing::info!("Prometheus metrics initialized");
    }
    installed
}

fn describe_metrics() {
    describe_counter!(
        "analyses_total",
        "Total number of content analyses by outcome"
    );
    describe_histogram!(
        "analysis_duration_seconds",
        "Duration of content analyses in seconds"
    );
    describe_counter!("api_requests_total", "Total number of API requests");
}

/// Render current metrics in Prometheus text format.
///
/// Returns `None` if metrics are not initialized.
pub fn render_metrics() -> Option<String> {
    PROMETHEUS_HANDLE.get().map(|h| h.render())
}

/// Record a finished analysis.
///
/// `outcome` is one of `ok`, `invalid`, `failed`.
pub fn record_analysis(outcome: &'static str, duration: Duration) {
    counter!("analyses_total", "outcome" => outcome).increment(1);
    histogram!("analysis_duration_seconds").record(duration.as_secs_f64());
}

/// Record a completed API request.
pub fn record_request(endpoint: &str, status: u16) {
    counter!(
        "api_requests_total",
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Times one analysis from creation to `finish`.
pub struct AnalysisTimer {
    start: Instant,
}

impl AnalysisTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn finish(self, outcome: &'static str) -> Duration {
        let elapsed = self.start.elapsed();
        record_analysis(outcome, elapsed);
        elapsed
    }
}
