//! Prometheus metrics registry and instruments.
//!
//! This module is framework-agnostic and can be used from any layer.

use std::sync::Once;

use lazy_static::lazy_static;
use prometheus::{HistogramOpts, IntCounterVec, IntGauge, Opts, Registry};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Metrics
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("socialhub_http_requests_total", "Total number of HTTP requests"),
        &["method", "endpoint", "status"]
    ).expect("metric can be created");
    pub static ref HTTP_REQUEST_DURATION_SECONDS: prometheus::HistogramVec = prometheus::HistogramVec::new(
        HistogramOpts::new(
            "socialhub_http_request_duration_seconds",
            "HTTP request duration in seconds"
        ).buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
        &["method", "endpoint"]
    ).expect("metric can be created");

    // Store Metrics
    pub static ref STORE_OPERATIONS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("socialhub_store_operations_total", "Total number of entity store operations"),
        &["operation", "collection"]
    ).expect("metric can be created");

    // Application Metrics
    pub static ref USERS_TOTAL: IntGauge = IntGauge::new(
        "socialhub_users_total",
        "Total number of registered users"
    ).expect("metric can be created");
    pub static ref POSTS_TOTAL: IntGauge = IntGauge::new(
        "socialhub_posts_total",
        "Total number of posts"
    ).expect("metric can be created");
    pub static ref GROUPS_TOTAL: IntGauge = IntGauge::new(
        "socialhub_groups_total",
        "Total number of groups"
    ).expect("metric can be created");
    pub static ref MESSAGES_TOTAL: IntGauge = IntGauge::new(
        "socialhub_messages_total",
        "Total number of direct messages"
    ).expect("metric can be created");

    // Error Metrics
    pub static ref ERRORS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("socialhub_errors_total", "Total number of errors"),
        &["error_type"]
    ).expect("metric can be created");
}

static INIT: Once = Once::new();

/// Initialize metrics registry.
///
/// Safe to call more than once; only the first call registers.
pub fn init_metrics() {
    INIT.call_once(|| {
        REGISTRY
            .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
            .expect("HTTP_REQUESTS_TOTAL can be registered");
        REGISTRY
            .register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()))
            .expect("HTTP_REQUEST_DURATION_SECONDS can be registered");
        REGISTRY
            .register(Box::new(STORE_OPERATIONS_TOTAL.clone()))
            .expect("STORE_OPERATIONS_TOTAL can be registered");
        REGISTRY
            .register(Box::new(USERS_TOTAL.clone()))
            .expect("USERS_TOTAL can be registered");
        REGISTRY
            .register(Box::new(POSTS_TOTAL.clone()))
            .expect("POSTS_TOTAL can be registered");
        REGISTRY
            .register(Box::new(GROUPS_TOTAL.clone()))
            .expect("GROUPS_TOTAL can be registered");
        REGISTRY
            .register(Box::new(MESSAGES_TOTAL.clone()))
            .expect("MESSAGES_TOTAL can be registered");
        REGISTRY
            .register(Box::new(ERRORS_TOTAL.clone()))
            .expect("ERRORS_TOTAL can be registered");

        tracing::info!("Metrics registry initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent_and_exports_socialhub_metrics() {
        init_metrics();
        init_metrics();

        STORE_OPERATIONS_TOTAL
            .with_label_values(&["get", "users"])
            .inc();
        let names: Vec<String> = REGISTRY
            .gather()
            .iter()
            .map(|family| family.get_name().to_string())
            .collect();
        assert!(names.iter().any(|name| name == "socialhub_store_operations_total"));
        assert!(names.iter().all(|name| name.starts_with("socialhub_")));
    }
}
