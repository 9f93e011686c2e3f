//! HTTP DTOs (Data Transfer Objects) for checkout endpoints.
//!
//! These types define the JSON request/response structure for the
//! checkout API. They are the boundary between HTTP and the
//! application layer; field names follow the client's camelCase
//! convention.

use serde::{Deserialize, Serialize};

use crate::application::handlers::checkout::{CardDetails, StartCheckoutCommand};
use crate::domain::checkout::{CustomerInfo, TransactionStatus};
use crate::domain::foundation::ProductId;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to start a checkout.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartCheckoutRequest {
    pub product_id: String,
    pub delivery_data: DeliveryData,
    pub base_fee: i64,
    pub delivery_fee: i64,
}

/// Customer delivery fields as the client submits them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryData {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
}

/// Request to confirm a started checkout.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmCheckoutRequest {
    pub transaction_id: String,
    pub payment_data: PaymentData,
}

/// Raw card fields as the client submits them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentData {
    pub card_number: String,
    pub card_exp_month: String,
    pub card_exp_year: String,
    pub card_cvc: String,
    pub card_holder: String,
}

impl StartCheckoutRequest {
    /// Convert into the application-layer command.
    pub fn into_command(self) -> StartCheckoutCommand {
        StartCheckoutCommand {
            product_id: ProductId::new(self.product_id),
            delivery_info: CustomerInfo {
                full_name: self.delivery_data.full_name,
                phone: self.delivery_data.phone,
                address: self.delivery_data.address,
                city: self.delivery_data.city,
            },
            base_fee: self.base_fee,
            delivery_fee: self.delivery_fee,
        }
    }
}

impl From<PaymentData> for CardDetails {
    fn from(data: PaymentData) -> Self {
        CardDetails {
            card_number: data.card_number,
            card_exp_month: data.card_exp_month,
            card_exp_year: data.card_exp_year,
            card_cvc: data.card_cvc,
            card_holder: data.card_holder,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a started checkout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartCheckoutResponse {
    pub transaction_id: String,
}

/// Response for a confirmed checkout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmCheckoutResponse {
    pub transaction_id: String,
    pub status: TransactionStatus,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_request_deserializes_camel_case() {
        let json = serde_json::json!({
            "productId": "product-1",
            "deliveryData": {
                "fullName": "Jane Roe",
                "phone": "3001234567",
                "address": "Calle 1 # 2-3",
                "city": "Bogota"
            },
            "baseFee": 5000,
            "deliveryFee": 3000
        });

        let request: StartCheckoutRequest = serde_json::from_value(json).unwrap();
        let cmd = request.into_command();

        assert_eq!(cmd.product_id.as_str(), "product-1");
        assert_eq!(cmd.delivery_info.full_name, "Jane Roe");
        assert_eq!(cmd.base_fee, 5000);
        assert_eq!(cmd.delivery_fee, 3000);
    }

    #[test]
    fn confirm_request_deserializes_camel_case() {
        let json = serde_json::json!({
            "transactionId": "7b7cbd6e-8e1a-41df-9f74-9b0e5a0cba10",
            "paymentData": {
                "cardNumber": "4242424242424242",
                "cardExpMonth": "08",
                "cardExpYear": "2028",
                "cardCvc": "123",
                "cardHolder": "Jane Roe"
            }
        });

        let request: ConfirmCheckoutRequest = serde_json::from_value(json).unwrap();

        assert_eq!(request.transaction_id, "7b7cbd6e-8e1a-41df-9f74-9b0e5a0cba10");
        assert_eq!(request.payment_data.card_number, "4242424242424242");
    }

    #[test]
    fn confirm_response_serializes_camel_case() {
        let response = ConfirmCheckoutResponse {
            transaction_id: "abc".to_string(),
            status: TransactionStatus::Success,
            message: "Payment successful".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["transactionId"], "abc");
        assert_eq!(json["status"], "SUCCESS");
        assert_eq!(json["message"], "Payment successful");
    }
}
