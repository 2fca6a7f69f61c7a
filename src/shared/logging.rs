//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use tracing::{error, info, warn};

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified configuration
    pub fn initialize(level: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| {
                crate::shared::error::AppError::Internal(format!(
                    "Failed to initialize logging: {}",
                    e
                ))
            })?;

        Ok(())
    }

    /// Log a payment initiation attempt with structured data
    pub fn log_initiation(reference: &str, variant: &str, amount: f64, client_ip: &str) {
        info!(
            reference = %reference,
            variant = %variant,
            amount = %amount,
            client_ip = %client_ip,
            "Initiating payment"
        );
    }

    /// Log a successful initiation
    pub fn log_initiation_success(reference: &str, variant: &str, duration_ms: u64) {
        info!(
            reference = %reference,
            variant = %variant,
            duration_ms = %duration_ms,
            "Payment initiation completed"
        );
    }

    /// Log a failed initiation
    pub fn log_initiation_error(
        reference: &str,
        error: &crate::shared::error::AppError,
        duration_ms: u64,
    ) {
        error!(
            reference = %reference,
            error = %error,
            duration_ms = %duration_ms,
            "Payment initiation failed"
        );
    }

    /// Log rate limiting events
    pub fn log_rate_limit(client_ip: &str) {
        warn!(client_ip = %client_ip, "Rate limit exceeded");
    }
}
