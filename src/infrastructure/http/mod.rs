//! HTTP infrastructure module
//!
//! Server, routes, handlers, and wire models for the public API surface.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;

pub use server::CheckoutServer;
