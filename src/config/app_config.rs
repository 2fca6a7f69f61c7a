//! Application configuration structures
//!
//! This module contains the main configuration structures for the application.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use validator::Validate;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    /// Server address to bind to
    pub bind_address: IpAddr,

    /// Server port
    #[validate(range(min = 1, max = 65535))]
    pub port: u16,

    /// Maximum request size in bytes
    #[validate(range(min = 1024, max = 1048576))] // 1KB to 1MB
    pub max_request_size: usize,
}

/// Payment provider configuration
///
/// The secret key authenticates server-side calls and must never be returned
/// to a client. The publishable key is safe for client exposure and is the
/// only credential used by the embedded-widget variant.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProviderConfig {
    /// Publishable (client-safe) API key
    #[validate(length(min = 1))]
    pub publishable_key: String,

    /// Secret API key; absence is a fatal configuration error at initiation time
    pub secret_key: Option<String>,

    /// Live flag; false selects the sandbox host
    pub live: bool,

    /// Fixed currency code
    #[validate(length(min = 3, max = 3))]
    pub currency: String,

    /// Provider API base URL for the live environment
    #[validate(url)]
    pub live_base_url: String,

    /// Provider API base URL for the sandbox environment
    #[validate(url)]
    pub sandbox_base_url: String,

    /// Outbound request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    pub timeout_seconds: u64,
}

/// Checkout flow configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckoutConfig {
    /// Integration variant: "hosted_redirect", "widget", or "push"
    #[validate(length(min = 1))]
    pub variant: String,

    /// Watchdog window after handing control to the embedded widget (seconds)
    #[validate(range(min = 1, max = 120))]
    pub watchdog_seconds: u64,

    /// Bounded attempts to wait for the widget to become ready on submit
    #[validate(range(min = 1, max = 20))]
    pub widget_ready_attempts: u32,

    /// Delay between widget readiness checks (milliseconds)
    #[validate(range(min = 10, max = 5000))]
    pub widget_ready_delay_ms: u64,

    /// Prefix for generated per-attempt references
    #[validate(length(min = 1))]
    pub reference_prefix: String,

    /// Public site host, used for provider callbacks and redirect URLs
    #[validate(url)]
    pub site_host: String,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RateLimitConfig {
    /// Requests per minute per IP
    #[validate(range(min = 1, max = 10000))]
    pub requests_per_minute: u32,

    /// Burst size
    #[validate(range(min = 1, max = 1000))]
    pub burst_size: u32,

    /// Enable rate limiting
    pub enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level
    #[validate(length(min = 1))]
    pub level: String,
}

/// Security configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SecurityConfig {
    /// Enable security headers on JSON responses
    pub enable_security_headers: bool,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Payment provider configuration
    pub provider: ProviderConfig,

    /// Checkout flow configuration
    pub checkout: CheckoutConfig,

    /// Rate limiting configuration
    pub rate_limit: RateLimitConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Security configuration
    pub security: SecurityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind_address: "127.0.0.1".parse().unwrap(),
                port: 8080,
                max_request_size: 64 * 1024, // 64KB
            },
            provider: ProviderConfig::default(),
            checkout: CheckoutConfig::default(),
            rate_limit: RateLimitConfig {
                requests_per_minute: 60,
                burst_size: 10,
                enabled: true,
            },
            logging: LoggingConfig { level: "info".to_string() },
            security: SecurityConfig { enable_security_headers: true },
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            publishable_key: "ISPubKey_test_placeholder".to_string(),
            secret_key: None,
            live: false,
            currency: "KES".to_string(),
            live_base_url: "https://payment.intasend.com/api/v1".to_string(),
            sandbox_base_url: "https://sandbox.intasend.com/api/v1".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            variant: "hosted_redirect".to_string(),
            watchdog_seconds: 10,
            widget_ready_attempts: 5,
            widget_ready_delay_ms: 500,
            reference_prefix: "service".to_string(),
            site_host: "https://thehumanresetlab.com".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("Conf").required(false))
            .add_source(config::Environment::with_prefix("RESETLAB").separator("__"))
            .build()
            .map_err(|e| {
                crate::shared::error::AppError::Config(format!(
                    "Failed to build configuration: {}",
                    e
                ))
            })?;

        let config: AppConfig = config.try_deserialize().map_err(|e| {
            crate::shared::error::AppError::Config(format!(
                "Failed to deserialize configuration: {}",
                e
            ))
        })?;

        config.validate_config().map_err(|e| {
            crate::shared::error::AppError::Validation(format!(
                "Configuration validation failed: {}",
                e
            ))
        })?;

        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate_config(&self) -> Result<(), validator::ValidationErrors> {
        self.server.validate()?;
        self.provider.validate()?;
        self.checkout.validate()?;
        self.rate_limit.validate()?;
        self.logging.validate()?;
        self.security.validate()?;

        Ok(())
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }

    /// Provider base URL consistent with the live flag
    pub fn provider_base_url(&self) -> &str {
        if self.provider.live {
            &self.provider.live_base_url
        } else {
            &self.provider.sandbox_base_url
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate_config().is_ok());
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.provider.currency, "KES");
        assert_eq!(config.checkout.variant, "hosted_redirect");
        assert_eq!(config.checkout.watchdog_seconds, 10);
        assert!(config.provider.secret_key.is_none());
    }

    #[test]
    fn test_base_url_follows_live_flag() {
        let mut config = AppConfig::default();
        assert!(config.provider_base_url().contains("sandbox"));
        config.provider.live = true;
        assert_eq!(config.provider_base_url(), "https://payment.intasend.com/api/v1");
    }

    #[test]
    fn test_invalid_watchdog_rejected() {
        let mut config = AppConfig::default();
        config.checkout.watchdog_seconds = 0;
        assert!(config.validate_config().is_err());
    }

    #[test]
    fn test_server_address() {
        let config = AppConfig::default();
        assert_eq!(config.server_address(), "127.0.0.1:8080");
    }
}
