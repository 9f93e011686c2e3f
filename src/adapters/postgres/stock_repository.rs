//! PostgreSQL implementation of StockRepository.
//!
//! The decrement is a single conditional UPDATE guarded by
//! `units >= $2`, so concurrent decrements against the same product
//! cannot overdraw: the database either applies the subtraction or
//! matches zero rows.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::ProductId;
use crate::ports::{StockRepository, StockRepositoryError};

/// PostgreSQL-backed stock store.
pub struct PostgresStockRepository {
    pool: PgPool,
}

impl PostgresStockRepository {
    /// Creates a repository over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StockRepository for PostgresStockRepository {
    async fn get_units(&self, product_id: &ProductId) -> Option<i64> {
        let units: Option<(i64,)> = sqlx::query_as(
            r#"
            SELECT units
            FROM stock_levels
            WHERE product_id = $1
            "#,
        )
        .bind(product_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(product_id = %product_id, error = %e, "stock lookup failed");
            None
        });

        units.map(|(u,)| u)
    }

    async fn decrement(
        &self,
        product_id: &ProductId,
        by: i64,
    ) -> Result<(), StockRepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE stock_levels
            SET units = units - $2
            WHERE product_id = $1 AND units >= $2
            "#,
        )
        .bind(product_id.as_str())
        .bind(by)
        .execute(&self.pool)
        .await
        .map_err(|e| StockRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 1 {
            return Ok(());
        }

        // The guard matched nothing: either there is no record at all or
        // too few units. Distinguish with a plain read.
        match self.get_units(product_id).await {
            None => Err(StockRepositoryError::ProductNotFound),
            Some(_) => Err(StockRepositoryError::InsufficientStock),
        }
    }
}
