//! Per-IP rate limiting middleware

use crate::config::AppConfig;
use crate::shared::error::{AppError, AppResult};
use crate::shared::logging::LoggingUtils;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::num::NonZeroU32;

/// Keyed rate limiter shared across the payment routes
pub struct RateLimitMiddleware {
    limiter: DefaultKeyedRateLimiter<String>,
    enabled: bool,
}

impl RateLimitMiddleware {
    pub fn new(config: &AppConfig) -> Self {
        let per_minute = NonZeroU32::new(config.rate_limit.requests_per_minute.max(1))
            .unwrap_or(NonZeroU32::MIN);
        let burst =
            NonZeroU32::new(config.rate_limit.burst_size.max(1)).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::per_minute(per_minute).allow_burst(burst);

        Self {
            limiter: RateLimiter::keyed(quota),
            enabled: config.rate_limit.enabled,
        }
    }

    /// Check whether a request from this client may proceed
    pub fn check(&self, client_ip: &str) -> AppResult<()> {
        if !self.enabled {
            return Ok(());
        }
        if self.limiter.check_key(&client_ip.to_string()).is_err() {
            LoggingUtils::log_rate_limit(client_ip);
            return Err(AppError::RateLimit);
        }
        Ok(())
    }
}
