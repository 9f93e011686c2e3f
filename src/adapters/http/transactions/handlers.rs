//! HTTP handlers for transaction endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::transactions::{
    GetTransactionStatusError, GetTransactionStatusQuery,
};
use crate::domain::foundation::TransactionId;

use super::super::{AppState, ErrorResponse};
use super::dto::TransactionStatusResponse;

/// GET /transactions/:id
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    // A transaction id that is not even a UUID cannot exist.
    let Ok(transaction_id) = id.parse::<TransactionId>() else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                "TRANSACTION_NOT_FOUND",
                "Transaction not found",
            )),
        )
            .into_response();
    };

    let handler = state.get_transaction_status_handler();

    match handler.handle(GetTransactionStatusQuery { transaction_id }).await {
        Ok(transaction) => (
            StatusCode::OK,
            Json(TransactionStatusResponse::from(transaction)),
        )
            .into_response(),
        Err(GetTransactionStatusError::TransactionNotFound) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                "TRANSACTION_NOT_FOUND",
                "Transaction not found",
            )),
        )
            .into_response(),
        Err(GetTransactionStatusError::DatabaseError) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("DATABASE_ERROR", "Internal server error")),
        )
            .into_response(),
    }
}
