//! Application layer - Services orchestrating the checkout flow

pub mod services;
