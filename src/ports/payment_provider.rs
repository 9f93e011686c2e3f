//! Payment provider port for external card payments.
//!
//! Defines the contract for the card-payment gateway the checkout flow
//! settles through. A single call initiates a payment and yields either
//! a business status (SUCCESS, FAILED, PROCESSING) or a port-level
//! error when the provider itself could not process the request.
//!
//! # Design
//!
//! - **Gateway agnostic**: the interface carries raw card fields and an
//!   amount; the adapter owns tokenization and signing.
//! - **Single attempt**: no retry semantics here; callers invoke once
//!   per use-case invocation.
//! - **Two channels**: a declined payment is a business status inside
//!   `Ok`, not an error. `Err` means the provider could not be asked.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for card-payment provider integrations.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Initiate a card payment for the given amount.
    ///
    /// # Errors
    ///
    /// Port-level failures only (provider unreachable, card rejected at
    /// tokenization, ...). A payment the provider *declined* comes back
    /// as `Ok` with [`PaymentStatus::Failed`].
    async fn create_card_payment(
        &self,
        request: CreatePaymentRequest,
    ) -> Result<PaymentResponse, PaymentProviderError>;
}

/// Request to initiate a card payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    /// Amount to charge, minor currency units.
    pub amount: i64,

    /// ISO 4217 currency code (the deployment's settlement currency).
    pub currency: String,

    pub card_number: String,
    pub card_exp_month: String,
    pub card_exp_year: String,
    pub card_cvc: String,
    pub card_holder: String,
}

/// Business status of an initiated payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Payment settled.
    Success,

    /// Payment declined by the provider.
    Failed,

    /// Asynchronous settlement still pending; caller must poll.
    Processing,
}

/// The provider's answer to a payment initiation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResponse {
    /// The provider's id for this payment.
    pub provider_transaction_id: String,

    pub status: PaymentStatus,

    /// Provider's reason when `status` is FAILED.
    pub failure_reason: Option<String>,
}

/// Port-level errors from the payment provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaymentProviderError {
    /// The provider could not be reached or answered abnormally.
    #[error("PROVIDER_UNAVAILABLE")]
    ProviderUnavailable,

    /// Card details were rejected before a payment was attempted.
    #[error("INVALID_CARD")]
    InvalidCard,

    /// The account backing the card has insufficient funds.
    #[error("INSUFFICIENT_FUNDS")]
    InsufficientFunds,

    /// The card was declined outright.
    #[error("CARD_DECLINED")]
    CardDeclined,

    /// Anything the adapter could not classify.
    #[error("UNKNOWN_ERROR")]
    Unknown,
}

impl PaymentProviderError {
    /// Stable error code, recorded as a transaction failure reason.
    pub fn code(&self) -> &'static str {
        match self {
            PaymentProviderError::ProviderUnavailable => "PROVIDER_UNAVAILABLE",
            PaymentProviderError::InvalidCard => "INVALID_CARD",
            PaymentProviderError::InsufficientFunds => "INSUFFICIENT_FUNDS",
            PaymentProviderError::CardDeclined => "CARD_DECLINED",
            PaymentProviderError::Unknown => "UNKNOWN_ERROR",
        }
    }
}
