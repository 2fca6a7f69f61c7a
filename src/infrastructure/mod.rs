//! Infrastructure layer
//!
//! Outbound adapters (payment provider, content store) and the inbound
//! HTTP surface.

pub mod adapters;
pub mod http;
