//! HTTP models - Infrastructure concerns
//!
//! Wire types for the payment-initiation endpoint. Field names follow the
//! client contract (`phone_number`, `api_ref`), not the domain names.

use crate::domain::checkout::BookingRequest;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/initiate-payment`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InitiatePaymentRequest {
    /// Amount in whole currency units
    #[validate(range(min = 0.01))]
    pub amount: f64,

    /// Payer email
    #[validate(length(min = 1, max = 320))]
    pub email: String,

    /// Payer phone, international dialing form (push variant)
    #[serde(default)]
    pub phone_number: Option<String>,

    /// Per-attempt reference generated by the client
    #[validate(length(min = 1, max = 100))]
    pub api_ref: String,

    /// Human-readable memo
    #[serde(default)]
    pub comment: Option<String>,
}

impl InitiatePaymentRequest {
    /// Validate the wire request
    pub fn validate_request(&self) -> crate::Result<()> {
        self.validate().map_err(|e| {
            crate::shared::error::AppError::Validation(format!("Request validation failed: {}", e))
        })
    }

    /// Convert into the domain booking request
    pub fn into_booking(self) -> BookingRequest {
        BookingRequest {
            amount: self.amount,
            email: self.email,
            phone: self.phone_number,
            reference: self.api_ref,
            comment: self.comment,
        }
    }
}

/// Error body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
