//! Sandbox payment gateway adapter.
//!
//! Implements the `PaymentProvider` trait against the sandbox card
//! gateway's HTTP API. A payment is three calls: tokenize the card
//! (public key), fetch the merchant acceptance token, and create the
//! transaction (private key) with an integrity signature over
//! reference + amount + currency.
//!
//! Gateway statuses map onto the port's business statuses:
//! APPROVED → SUCCESS, PENDING → PROCESSING, anything else → FAILED
//! with the gateway's status message. Transport failures are
//! port-level `ProviderUnavailable` errors.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::ports::{
    CreatePaymentRequest, PaymentProvider, PaymentProviderError, PaymentResponse, PaymentStatus,
};

/// Sandbox gateway configuration.
#[derive(Clone)]
pub struct SandboxConfig {
    /// Base URL of the gateway API.
    base_url: String,

    /// Public key, used for card tokenization and merchant lookup.
    public_key: String,

    /// Private key, used to create transactions.
    private_key: SecretString,

    /// Integrity key, mixed into the transaction signature.
    integrity_key: SecretString,
}

impl SandboxConfig {
    /// Create a new sandbox configuration.
    pub fn new(
        base_url: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
        integrity_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            public_key: public_key.into(),
            private_key: SecretString::new(private_key.into()),
            integrity_key: SecretString::new(integrity_key.into()),
        }
    }
}

/// Sandbox gateway payment adapter.
pub struct SandboxPaymentAdapter {
    config: SandboxConfig,
    http_client: reqwest::Client,
}

// ════════════════════════════════════════════════════════════════════════════
// Gateway wire types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
struct TokenResponse {
    data: TokenData,
}

#[derive(Debug, Deserialize)]
struct TokenData {
    id: String,
}

#[derive(Debug, Deserialize)]
struct MerchantResponse {
    data: MerchantData,
}

#[derive(Debug, Deserialize)]
struct MerchantData {
    presigned_acceptance: PresignedAcceptance,
}

#[derive(Debug, Deserialize)]
struct PresignedAcceptance {
    acceptance_token: String,
}

#[derive(Debug, Deserialize)]
struct GatewayTransactionResponse {
    data: GatewayTransactionData,
}

#[derive(Debug, Deserialize)]
struct GatewayTransactionData {
    id: String,
    status: String,
    status_message: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Pure helpers
// ════════════════════════════════════════════════════════════════════════════

/// Integrity signature the gateway verifies on transaction creation:
/// hex(SHA-256(reference + amount + currency + integrity key)).
fn integrity_signature(reference: &str, amount: i64, currency: &str, integrity_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(reference.as_bytes());
    hasher.update(amount.to_string().as_bytes());
    hasher.update(currency.as_bytes());
    hasher.update(integrity_key.as_bytes());
    hex_encode(&hasher.finalize())
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// The gateway wants two-digit expiry years.
fn short_exp_year(exp_year: &str) -> &str {
    if exp_year.len() > 2 {
        &exp_year[exp_year.len() - 2..]
    } else {
        exp_year
    }
}

fn map_gateway_status(data: GatewayTransactionData) -> PaymentResponse {
    match data.status.as_str() {
        "APPROVED" => PaymentResponse {
            provider_transaction_id: data.id,
            status: PaymentStatus::Success,
            failure_reason: None,
        },
        "PENDING" => PaymentResponse {
            provider_transaction_id: data.id,
            status: PaymentStatus::Processing,
            failure_reason: None,
        },
        _ => PaymentResponse {
            provider_transaction_id: data.id,
            status: PaymentStatus::Failed,
            failure_reason: Some(
                data.status_message
                    .unwrap_or_else(|| "Payment declined".to_string()),
            ),
        },
    }
}

impl SandboxPaymentAdapter {
    /// Create a new sandbox adapter with the given configuration.
    pub fn new(config: SandboxConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Tokenize the raw card fields with the gateway.
    async fn create_card_token(
        &self,
        request: &CreatePaymentRequest,
    ) -> Result<String, PaymentProviderError> {
        let response = self
            .http_client
            .post(format!("{}/tokens/cards", self.config.base_url))
            .bearer_auth(&self.config.public_key)
            .json(&serde_json::json!({
                "number": request.card_number,
                "cvc": request.card_cvc,
                "exp_month": request.card_exp_month,
                "exp_year": short_exp_year(&request.card_exp_year),
                "card_holder": request.card_holder,
            }))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "card tokenization request failed");
                PaymentProviderError::ProviderUnavailable
            })?;

        if !response.status().is_success() {
            return Err(PaymentProviderError::InvalidCard);
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|_| PaymentProviderError::ProviderUnavailable)?;

        Ok(token.data.id)
    }

    /// Fetch the merchant's presigned acceptance token.
    ///
    /// Falls back to an empty token when the lookup fails; the gateway
    /// then rejects the transaction, which surfaces as a decline.
    async fn acceptance_token(&self) -> String {
        let url = format!(
            "{}/merchants/{}",
            self.config.base_url, self.config.public_key
        );

        let merchant: Result<MerchantResponse, _> = match self.http_client.get(url).send().await {
            Ok(response) if response.status().is_success() => response.json().await,
            Ok(response) => {
                tracing::warn!(status = %response.status(), "merchant lookup rejected");
                return String::new();
            }
            Err(e) => {
                tracing::warn!(error = %e, "merchant lookup failed");
                return String::new();
            }
        };

        merchant
            .map(|m| m.data.presigned_acceptance.acceptance_token)
            .unwrap_or_default()
    }

    /// Create the gateway transaction against the tokenized card.
    async fn create_transaction(
        &self,
        token: String,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentResponse, PaymentProviderError> {
        let acceptance_token = self.acceptance_token().await;
        let reference = format!("ref-{}", Uuid::new_v4().simple());
        let signature = integrity_signature(
            &reference,
            amount,
            currency,
            self.config.integrity_key.expose_secret(),
        );

        let response = self
            .http_client
            .post(format!("{}/transactions", self.config.base_url))
            .bearer_auth(self.config.private_key.expose_secret())
            .json(&serde_json::json!({
                "acceptance_token": acceptance_token,
                "amount_in_cents": amount,
                "currency": currency,
                "customer_email": "customer@test.com",
                "payment_method": {
                    "type": "CARD",
                    "token": token,
                    "installments": 1,
                },
                "reference": reference,
                "signature": signature,
            }))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "transaction request failed");
                PaymentProviderError::ProviderUnavailable
            })?;

        if !response.status().is_success() {
            return Err(PaymentProviderError::CardDeclined);
        }

        let body: GatewayTransactionResponse = response
            .json()
            .await
            .map_err(|_| PaymentProviderError::ProviderUnavailable)?;

        Ok(map_gateway_status(body.data))
    }
}

#[async_trait]
impl PaymentProvider for SandboxPaymentAdapter {
    async fn create_card_payment(
        &self,
        request: CreatePaymentRequest,
    ) -> Result<PaymentResponse, PaymentProviderError> {
        let token = self.create_card_token(&request).await?;
        self.create_transaction(token, request.amount, &request.currency)
            .await
    }
}
