//! HTTP request handlers

pub mod content;
pub mod health;
pub mod metrics;
pub mod payments;

pub use content::{handle_get_post, handle_list_posts};
pub use health::handle_health_request;
pub use metrics::handle_metrics_request;
pub use payments::handle_initiate_payment;
