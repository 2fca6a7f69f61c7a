//! Payment initiation gateway
//!
//! Server-side half of the checkout core: holds the provider credentials,
//! shapes one provider request per initiation, and returns the minimal
//! handoff payload the client needs to finish the flow. Retries are the
//! flow controller's responsibility, never the gateway's.

use crate::config::AppConfig;
use crate::domain::checkout::{BookingRequest, CheckoutVariant, HandoffPayload};
use crate::infrastructure::adapters::intasend::{
    ChargeRequest, CheckoutCreateRequest, ProviderApi, PushRequest,
};
use crate::shared::error::{AppError, AppResult};
use crate::shared::logging::LoggingUtils;
use async_trait::async_trait;
use std::sync::Arc;

/// Port the flow controller initiates payments through
#[async_trait]
pub trait InitiateGateway: Send + Sync {
    async fn initiate(&self, request: &BookingRequest) -> AppResult<HandoffPayload>;
}

/// Payment initiation gateway service
pub struct GatewayService {
    config: Arc<AppConfig>,
    variant: CheckoutVariant,
    provider: Arc<dyn ProviderApi>,
}

impl GatewayService {
    pub fn new(config: Arc<AppConfig>, provider: Arc<dyn ProviderApi>) -> AppResult<Self> {
        let variant = config
            .checkout
            .variant
            .parse::<CheckoutVariant>()
            .map_err(AppError::Config)?;
        Ok(Self { config, variant, provider })
    }

    /// Active integration variant
    pub fn variant(&self) -> CheckoutVariant {
        self.variant
    }

    /// Secret credential, or the fatal configuration error when absent.
    ///
    /// Distinct from a provider rejection: this never reaches the provider
    /// and is surfaced to clients as a generic 500.
    fn secret_key(&self) -> AppResult<&str> {
        self.config
            .provider
            .secret_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| AppError::Config("payment secret key is not configured".into()))
    }

    async fn initiate_hosted_redirect(&self, request: &BookingRequest) -> AppResult<HandoffPayload> {
        let secret = self.secret_key()?;
        let host = &self.config.checkout.site_host;
        // No account system exists, so the provider sees a placeholder guest identity
        let charge = ChargeRequest {
            first_name: "Guest".to_string(),
            last_name: "User".to_string(),
            email: request.email.clone(),
            host: host.clone(),
            amount: request.amount,
            currency: self.config.provider.currency.clone(),
            api_ref: request.reference.clone(),
            comment: request.comment.clone(),
            redirect_url: format!("{}/payment-success?ref={}", host, request.reference),
        };
        let response = self.provider.charge(secret, &charge).await?;
        Ok(HandoffPayload::Redirect { url: response.url })
    }

    async fn initiate_widget(&self, request: &BookingRequest) -> AppResult<HandoffPayload> {
        let checkout = CheckoutCreateRequest {
            public_key: self.config.provider.publishable_key.clone(),
            email: request.email.clone(),
            amount: request.amount,
            currency: self.config.provider.currency.clone(),
            api_ref: request.reference.clone(),
            comment: request.comment.clone(),
        };
        let response = self.provider.create_checkout(&checkout).await?;
        Ok(HandoffPayload::Widget {
            checkout_id: response.id,
            signature: response.signature,
            live: self.config.provider.live,
        })
    }

    async fn initiate_push(&self, request: &BookingRequest) -> AppResult<HandoffPayload> {
        let secret = self.secret_key()?;
        let phone = request
            .phone
            .clone()
            .ok_or_else(|| AppError::Validation("phone number is required".into()))?;
        let push = PushRequest {
            phone_number: phone,
            email: request.email.clone(),
            amount: request.amount,
            currency: self.config.provider.currency.clone(),
            api_ref: request.reference.clone(),
        };
        let ack = self.provider.push(secret, &push).await?;
        Ok(HandoffPayload::PushAck { raw: ack })
    }
}

#[async_trait]
impl InitiateGateway for GatewayService {
    /// Initiate one payment: exactly one outbound provider call, no retries
    async fn initiate(&self, request: &BookingRequest) -> AppResult<HandoffPayload> {
        request.validate(self.variant)?;

        let started = std::time::Instant::now();
        LoggingUtils::log_initiation(&request.reference, self.variant.as_str(), request.amount, "-");

        let result = match self.variant {
            CheckoutVariant::HostedRedirect => self.initiate_hosted_redirect(request).await,
            CheckoutVariant::Widget => self.initiate_widget(request).await,
            CheckoutVariant::Push => self.initiate_push(request).await,
        };

        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => LoggingUtils::log_initiation_success(
                &request.reference,
                self.variant.as_str(),
                duration_ms,
            ),
            Err(e) => LoggingUtils::log_initiation_error(&request.reference, e, duration_ms),
        }

        result
    }
}
