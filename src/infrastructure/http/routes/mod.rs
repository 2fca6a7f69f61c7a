//! HTTP routes module
//!
//! Route configuration for the payment and content endpoints.

pub mod builder;
pub mod content;
pub mod health;
pub mod metrics;
pub mod payments;

pub use builder::RouteBuilder;
pub use content::ContentRoutes;
pub use health::HealthRoutes;
pub use metrics::MetricsRoutes;
pub use payments::PaymentRoutes;
