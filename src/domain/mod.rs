//! Domain layer - Core business models and rules

pub mod checkout;
pub mod content;
