//! HTTP handlers for product endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::catalog::{GetProductByIdQuery, GetProductError};
use crate::domain::foundation::ProductId;

use super::super::{AppState, ErrorResponse};
use super::dto::ProductResponse;

/// GET /products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let handler = state.get_product_handler();

    match handler
        .handle(GetProductByIdQuery {
            product_id: ProductId::new(id),
        })
        .await
    {
        Ok(result) => (StatusCode::OK, Json(ProductResponse::from(result))).into_response(),
        Err(GetProductError::ProductNotFound) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("PRODUCT_NOT_FOUND", "Product not found")),
        )
            .into_response(),
    }
}
