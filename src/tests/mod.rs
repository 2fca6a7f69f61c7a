//! Integration test suite
//!
//! End-to-end tests for the HTTP endpoints and scenario tests for the
//! checkout flow controller. Unit tests live next to the code they cover.

pub mod common;
pub mod endpoints;

/// Test configuration helpers
pub mod config {
    use crate::config::AppConfig;

    /// Configuration for endpoint tests: sandbox provider, no rate limiting
    pub fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.server.port = 0;
        config.rate_limit.enabled = false;
        config.provider.secret_key = Some("ISSecretKey_test_abc123".to_string());
        config
    }
}
