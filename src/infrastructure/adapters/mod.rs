//! Infrastructure adapters

pub mod content_store;
pub mod gateway_client;
pub mod intasend;

pub use content_store::{DeviceLikeStore, StaticArticleStore};
pub use gateway_client::HttpGatewayClient;
pub use intasend::{
    ChargeRequest, ChargeResponse, CheckoutCreateRequest, CheckoutCreateResponse, IntaSendClient,
    ProviderApi, PushRequest,
};
