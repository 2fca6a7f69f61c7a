//! Checkout domain models and types

use crate::shared::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Supported payment integration variants
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutVariant {
    /// Full-page redirect to a provider-hosted checkout page
    HostedRedirect,
    /// Embedded widget resumed client-side with a checkout-id/signature pair
    Widget,
    /// Mobile-money push; completion happens out-of-band on the payer's phone
    Push,
}

impl CheckoutVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutVariant::HostedRedirect => "hosted_redirect",
            CheckoutVariant::Widget => "widget",
            CheckoutVariant::Push => "push",
        }
    }
}

impl std::str::FromStr for CheckoutVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hosted_redirect" => Ok(CheckoutVariant::HostedRedirect),
            "widget" => Ok(CheckoutVariant::Widget),
            "push" => Ok(CheckoutVariant::Push),
            _ => Err(format!("unsupported checkout variant: {}", s)),
        }
    }
}

/// One checkout attempt's booking details
///
/// Lives only for the duration of a single attempt: the reference is
/// regenerated for every retry so the provider never sees a duplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Amount in whole currency units
    pub amount: f64,
    /// Payer email address
    pub email: String,
    /// Payer phone, international dialing form; required by the push variant
    pub phone: Option<String>,
    /// Per-attempt unique reference correlating this booking with a provider transaction
    pub reference: String,
    /// Human-readable memo passed through to the provider
    pub comment: Option<String>,
}

impl BookingRequest {
    /// Validate the request for the given integration variant.
    ///
    /// Only the minimum the flow needs: positive amount, non-empty email,
    /// and a non-empty phone when the push variant will dial it.
    pub fn validate(&self, variant: CheckoutVariant) -> AppResult<()> {
        if self.amount <= 0.0 {
            return Err(AppError::Validation("amount must be positive".into()));
        }
        if self.email.trim().is_empty() {
            return Err(AppError::Validation("email is required".into()));
        }
        if variant == CheckoutVariant::Push
            && self.phone.as_deref().map_or(true, |p| p.trim().is_empty())
        {
            return Err(AppError::Validation("phone number is required".into()));
        }
        Ok(())
    }
}

/// Generate a per-attempt reference: prefix, attempt timestamp, uuid fragment.
///
/// The uuid fragment guards against two attempts landing on the same
/// millisecond, which the provider would treat as a duplicate transaction.
pub fn generate_reference(prefix: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let nonce = uuid::Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", prefix, millis, &nonce[..8])
}

/// Minimal data the gateway hands back for the client to complete payment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum HandoffPayload {
    /// Hosted-redirect variant: browser navigates to this URL
    Redirect { url: String },
    /// Widget variant: authorizes the embedded widget to resume the flow
    Widget {
        checkout_id: String,
        signature: String,
        live: bool,
    },
    /// Push variant: the provider's raw acknowledgement, no URL
    PushAck { raw: serde_json::Value },
}

/// Checkout session status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutState {
    Idle,
    Collecting,
    Processing,
    AwaitingWidget,
    AwaitingPush,
    Succeeded,
    Failed,
    Cancelled,
}

/// Event emitted by the embedded payment widget
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WidgetEvent {
    Complete,
    Failed,
    InProgress,
}
