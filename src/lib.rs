//! Reset Lab Checkout - payment initiation gateway and checkout flow core
//!
//! This library provides a server-side gateway that initiates payments with
//! the provider using a server-held credential, plus the client-facing
//! checkout flow controller that drives a payment attempt from form input
//! to a terminal outcome.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod middleware;
pub mod shared;

#[cfg(test)]
mod tests;

pub use config::AppConfig;
pub use infrastructure::http::CheckoutServer;
pub use shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
