//! HTTP middleware

pub mod rate_limit;
pub mod security_headers;

pub use rate_limit::RateLimitMiddleware;
pub use security_headers::SecurityHeadersMiddleware;
