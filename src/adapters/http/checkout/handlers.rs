//! HTTP handlers for checkout endpoints.
//!
//! These handlers connect Axum routes to the application layer and map
//! use-case error codes to transport status codes:
//!
//! - `PRODUCT_NOT_FOUND` / `TRANSACTION_NOT_FOUND` → 404
//! - `INSUFFICIENT_STOCK` → 400
//! - `DATABASE_ERROR` → 500

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::checkout::{
    ConfirmCheckoutCommand, ConfirmCheckoutError, StartCheckoutError,
};
use crate::domain::checkout::TransactionStatus;
use crate::domain::foundation::TransactionId;

use super::super::{AppState, ErrorResponse};
use super::dto::{
    ConfirmCheckoutRequest, ConfirmCheckoutResponse, StartCheckoutRequest, StartCheckoutResponse,
};

/// POST /checkout/start
pub async fn start_checkout(
    State(state): State<AppState>,
    Json(request): Json<StartCheckoutRequest>,
) -> impl IntoResponse {
    let handler = state.start_checkout_handler();

    match handler.handle(request.into_command()).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(StartCheckoutResponse {
                transaction_id: result.transaction_id.to_string(),
            }),
        )
            .into_response(),
        Err(StartCheckoutError::ProductNotFound) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("PRODUCT_NOT_FOUND", "Product not found")),
        )
            .into_response(),
        Err(StartCheckoutError::InsufficientStock) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("INSUFFICIENT_STOCK", "Insufficient stock")),
        )
            .into_response(),
        Err(StartCheckoutError::DatabaseError) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("DATABASE_ERROR", "Internal server error")),
        )
            .into_response(),
    }
}

/// POST /checkout/confirm
pub async fn confirm_checkout(
    State(state): State<AppState>,
    Json(request): Json<ConfirmCheckoutRequest>,
) -> impl IntoResponse {
    // A transaction id that is not even a UUID cannot exist.
    let Ok(transaction_id) = request.transaction_id.parse::<TransactionId>() else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                "TRANSACTION_NOT_FOUND",
                "Transaction not found",
            )),
        )
            .into_response();
    };

    let handler = state.confirm_checkout_handler();
    let command = ConfirmCheckoutCommand {
        transaction_id,
        payment: request.payment_data.into(),
    };

    match handler.handle(command).await {
        Ok(result) => {
            let transaction = result.transaction;
            let message = if transaction.status == TransactionStatus::Success {
                "Payment successful"
            } else {
                "Payment failed"
            };
            (
                StatusCode::OK,
                Json(ConfirmCheckoutResponse {
                    transaction_id: transaction.id.to_string(),
                    status: transaction.status,
                    message: message.to_string(),
                }),
            )
                .into_response()
        }
        Err(ConfirmCheckoutError::TransactionNotFound) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                "TRANSACTION_NOT_FOUND",
                "Transaction not found",
            )),
        )
            .into_response(),
        Err(ConfirmCheckoutError::InsufficientStock) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("INSUFFICIENT_STOCK", "Insufficient stock")),
        )
            .into_response(),
        Err(ConfirmCheckoutError::DatabaseError) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("DATABASE_ERROR", "Internal server error")),
        )
            .into_response(),
    }
}
