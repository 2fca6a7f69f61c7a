//! Application services

pub mod controller;
pub mod gateway_service;
pub mod metrics_service;

pub use controller::{CheckoutController, ControllerConfig, PaymentWidget, SubmitOutcome};
pub use gateway_service::{GatewayService, InitiateGateway};
pub use metrics_service::MetricsService;
