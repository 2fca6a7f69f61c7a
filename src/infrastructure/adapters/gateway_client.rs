//! HTTP client for the payment-initiation endpoint
//!
//! Lets the flow controller run against a remote gateway the way the site's
//! modal does: one `POST /api/initiate-payment` per attempt, decoding the
//! three handoff shapes and the `{error}` body. Single-shot by design; the
//! controller owns retries.

use crate::application::services::gateway_service::InitiateGateway;
use crate::domain::checkout::{BookingRequest, HandoffPayload};
use crate::shared::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub struct HttpGatewayClient {
    endpoint: String,
    client: Client,
}

impl HttpGatewayClient {
    /// Create a client for a gateway at `base_url` (no trailing slash needed)
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            endpoint: format!("{}/api/initiate-payment", base_url.trim_end_matches('/')),
            client,
        })
    }
}

#[async_trait]
impl InitiateGateway for HttpGatewayClient {
    async fn initiate(&self, request: &BookingRequest) -> AppResult<HandoffPayload> {
        info!(reference = %request.reference, "Calling initiate-payment endpoint");

        let body = serde_json::json!({
            "amount": request.amount,
            "email": request.email,
            "phone_number": request.phone,
            "api_ref": request.reference,
            "comment": request.comment,
        });

        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();
        let value: serde_json::Value = response.json().await?;

        if !status.is_success() {
            let message = value
                .get("error")
                .and_then(|e| e.as_str())
                .unwrap_or("Payment initiation failed")
                .to_string();
            return Err(AppError::Provider { status: status.as_u16(), message });
        }

        if let Some(url) = value.get("url").and_then(|u| u.as_str()) {
            return Ok(HandoffPayload::Redirect { url: url.to_string() });
        }
        if let (Some(checkout_id), Some(signature)) = (
            value.get("checkout_id").and_then(|v| v.as_str()),
            value.get("signature").and_then(|v| v.as_str()),
        ) {
            return Ok(HandoffPayload::Widget {
                checkout_id: checkout_id.to_string(),
                signature: signature.to_string(),
                live: value.get("live").and_then(|v| v.as_bool()).unwrap_or(false),
            });
        }
        // Anything else is the push variant's raw acknowledgement
        Ok(HandoffPayload::PushAck { raw: value })
    }
}
