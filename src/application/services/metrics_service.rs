//! Metrics service for collecting application metrics

use crate::shared::error::{AppError, AppResult};
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

/// Metrics service backed by a prometheus registry
pub struct MetricsService {
    registry: Registry,
    http_requests: IntCounterVec,
    initiations: IntCounterVec,
    rate_limited: IntCounter,
}

impl MetricsService {
    /// Create a new metrics service
    pub fn new() -> AppResult<Self> {
        let registry = Registry::new();

        let http_requests = IntCounterVec::new(
            Opts::new("checkout_http_requests_total", "HTTP requests by route and status"),
            &["route", "status"],
        )
        .map_err(|e| AppError::Internal(format!("metrics: {}", e)))?;

        let initiations = IntCounterVec::new(
            Opts::new(
                "checkout_initiations_total",
                "Payment initiation attempts by variant and outcome",
            ),
            &["variant", "outcome"],
        )
        .map_err(|e| AppError::Internal(format!("metrics: {}", e)))?;

        let rate_limited = IntCounter::new(
            "checkout_rate_limited_total",
            "Requests rejected by the per-IP rate limiter",
        )
        .map_err(|e| AppError::Internal(format!("metrics: {}", e)))?;

        registry
            .register(Box::new(http_requests.clone()))
            .and_then(|_| registry.register(Box::new(initiations.clone())))
            .and_then(|_| registry.register(Box::new(rate_limited.clone())))
            .map_err(|e| AppError::Internal(format!("metrics registration: {}", e)))?;

        Ok(Self { registry, http_requests, initiations, rate_limited })
    }

    /// Record an HTTP request outcome
    pub fn record_http_request(&self, route: &str, status: u16) {
        self.http_requests
            .with_label_values(&[route, &status.to_string()])
            .inc();
    }

    /// Record a payment initiation attempt
    pub fn record_initiation(&self, variant: &str, success: bool) {
        let outcome = if success { "success" } else { "failure" };
        self.initiations.with_label_values(&[variant, outcome]).inc();
    }

    /// Record a rate-limited request
    pub fn record_rate_limited(&self) {
        self.rate_limited.inc();
    }

    /// Render the registry in the Prometheus text exposition format
    pub fn gather(&self) -> AppResult<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(|e| AppError::Internal(format!("metrics encoding: {}", e)))?;
        String::from_utf8(buffer).map_err(|e| AppError::Internal(format!("metrics encoding: {}", e)))
    }
}
