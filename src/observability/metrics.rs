//! Simple metrics module for the lookup service
//!
//! Metrics are recorded through the `metrics` facade; until `init` installs
//! the Prometheus recorder every call is a no-op.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::fmt;
use std::sync::OnceLock;
use tracing::info;

/// Enum representing all metric names used in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // Remote data catalog
    RemoteRequestsSuccess,
    RemoteRequestsError,
    RemoteRequestDuration,
    RemoteRecordsReturned,

    // Fallback cache
    CacheWritesSuccess,
    CacheWritesError,
    CacheFallbackServed,
    CacheFallbackMiss,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::RemoteRequestsSuccess => "nearby_remote_requests_success_total",
            MetricName::RemoteRequestsError => "nearby_remote_requests_error_total",
            MetricName::RemoteRequestDuration => "nearby_remote_request_duration_seconds",
            MetricName::RemoteRecordsReturned => "nearby_remote_records_returned",
            MetricName::CacheWritesSuccess => "nearby_cache_writes_success_total",
            MetricName::CacheWritesError => "nearby_cache_writes_error_total",
            MetricName::CacheFallbackServed => "nearby_cache_fallback_served_total",
            MetricName::CacheFallbackMiss => "nearby_cache_fallback_miss_total",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Safe to call more than once.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    if METRICS_HANDLE.get().is_some() {
        return Ok(());
    }
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {}", e))?;
    METRICS_HANDLE.set(handle).ok();
    info!("Metrics system initialized");
    Ok(())
}

/// Render current metrics in Prometheus text format, if the recorder is installed.
pub fn render() -> Option<String> {
    METRICS_HANDLE.get().map(|handle| handle.render())
}

pub mod remote {
    use super::MetricName;

    pub fn request_success(duration_secs: f64, records: usize) {
        ::metrics::counter!(MetricName::RemoteRequestsSuccess.as_str()).increment(1);
        ::metrics::histogram!(MetricName::RemoteRequestDuration.as_str()).record(duration_secs);
        ::metrics::histogram!(MetricName::RemoteRecordsReturned.as_str()).record(records as f64);
    }

    pub fn request_error(kind: &'static str) {
        ::metrics::counter!(MetricName::RemoteRequestsError.as_str(), "kind" => kind).increment(1);
    }
}

pub mod cache {
    use super::MetricName;

    pub fn write_success() {
        ::metrics::counter!(MetricName::CacheWritesSuccess.as_str()).increment(1);
    }

    pub fn write_error() {
        ::metrics::counter!(MetricName::CacheWritesError.as_str()).increment(1);
    }

    pub fn fallback_served(category_id: &str) {
        ::metrics::counter!(MetricName::CacheFallbackServed.as_str(), "category" => category_id.to_string())
            .increment(1);
    }

    pub fn fallback_miss(category_id: &str) {
        ::metrics::counter!(MetricName::CacheFallbackMiss.as_str(), "category" => category_id.to_string())
            .increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn metric_names_are_unique_and_prefixed() {
        let all = [
            MetricName::RemoteRequestsSuccess,
            MetricName::RemoteRequestsError,
            MetricName::RemoteRequestDuration,
            MetricName::RemoteRecordsReturned,
            MetricName::CacheWritesSuccess,
            MetricName::CacheWritesError,
            MetricName::CacheFallbackServed,
            MetricName::CacheFallbackMiss,
        ];
        let names: HashSet<_> = all.iter().map(|m| m.as_str()).collect();
        assert_eq!(names.len(), all.len());
        assert!(names.iter().all(|n| n.starts_with("nearby_")));
    }

    #[test]
    fn recording_without_recorder_is_a_no_op() {
        remote::request_error("status");
        cache::fallback_miss("antenatal");
    }
}
