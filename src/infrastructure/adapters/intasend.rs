//! IntaSend provider adapter
//!
//! Outbound HTTP integration with the payment provider. The `ProviderApi`
//! trait is the seam the gateway service calls through; `IntaSendClient`
//! implements it against the provider's live or sandbox host.

use crate::config::AppConfig;
use crate::shared::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Hosted-checkout charge request (secret-key authenticated)
#[derive(Debug, Clone, Serialize)]
pub struct ChargeRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub host: String,
    pub amount: f64,
    pub currency: String,
    pub api_ref: String,
    pub comment: Option<String>,
    pub redirect_url: String,
}

/// Hosted-checkout charge response
#[derive(Debug, Clone, Deserialize)]
pub struct ChargeResponse {
    pub url: String,
}

/// Embedded-widget checkout creation request (publishable key only)
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutCreateRequest {
    pub public_key: String,
    pub email: String,
    pub amount: f64,
    pub currency: String,
    pub api_ref: String,
    pub comment: Option<String>,
}

/// Embedded-widget checkout creation response
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutCreateResponse {
    pub id: String,
    pub signature: String,
}

/// Mobile-money push request (secret-key authenticated)
#[derive(Debug, Clone, Serialize)]
pub struct PushRequest {
    pub phone_number: String,
    pub email: String,
    pub amount: f64,
    pub currency: String,
    pub api_ref: String,
}

/// Outbound provider API, one method per integration strategy
#[async_trait]
pub trait ProviderApi: Send + Sync {
    /// Create a hosted checkout charge; returns the redirect URL
    async fn charge(&self, secret_key: &str, request: &ChargeRequest) -> AppResult<ChargeResponse>;

    /// Create an embedded-widget checkout; never sees the secret key
    async fn create_checkout(
        &self,
        request: &CheckoutCreateRequest,
    ) -> AppResult<CheckoutCreateResponse>;

    /// Dispatch a mobile-money push; returns the provider's raw acknowledgement
    async fn push(&self, secret_key: &str, request: &PushRequest)
        -> AppResult<serde_json::Value>;
}

/// HTTP client for the IntaSend API
pub struct IntaSendClient {
    base_url: String,
    client: Client,
}

impl IntaSendClient {
    /// Create a client against the host selected by the configured live flag
    pub fn new(config: Arc<AppConfig>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.provider.timeout_seconds))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.provider_base_url().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<B, T>(&self, path: &str, bearer: Option<&str>, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.post(&url).json(body);
        if let Some(secret) = bearer {
            request = request.bearer_auth(secret);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            // Forward only the provider's status/message pair, never our own detail
            let message = serde_json::from_str::<serde_json::Value>(&text)
                .ok()
                .and_then(|v| {
                    v.get("error")
                        .or_else(|| v.get("detail"))
                        .or_else(|| v.get("message"))
                        .and_then(|m| m.as_str().map(|s| s.to_string()))
                })
                .unwrap_or_else(|| text.clone());
            error!(status = %status, path = %path, "Provider request rejected");
            return Err(AppError::Provider { status: status.as_u16(), message });
        }

        serde_json::from_str::<T>(&text).map_err(|e| {
            AppError::Provider {
                status: status.as_u16(),
                message: format!("invalid provider response: {}", e),
            }
        })
    }
}

#[async_trait]
impl ProviderApi for IntaSendClient {
    async fn charge(&self, secret_key: &str, request: &ChargeRequest) -> AppResult<ChargeResponse> {
        info!(api_ref = %request.api_ref, "Sending hosted checkout charge");
        self.post_json("/checkout/", Some(secret_key), request).await
    }

    async fn create_checkout(
        &self,
        request: &CheckoutCreateRequest,
    ) -> AppResult<CheckoutCreateResponse> {
        info!(api_ref = %request.api_ref, "Creating widget checkout");
        self.post_json("/checkout/", None, request).await
    }

    async fn push(
        &self,
        secret_key: &str,
        request: &PushRequest,
    ) -> AppResult<serde_json::Value> {
        info!(api_ref = %request.api_ref, "Dispatching mobile-money push");
        self.post_json("/payment/mpesa-stk-push/", Some(secret_key), request).await
    }
}
