//! PostgreSQL implementation of DeliveriesRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::checkout::{Delivery, DeliveryStatus};
use crate::ports::{DeliveriesRepository, DeliveryRepositoryError};

/// PostgreSQL-backed delivery store.
pub struct PostgresDeliveriesRepository {
    pool: PgPool,
}

impl PostgresDeliveriesRepository {
    /// Creates a repository over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn status_to_string(status: DeliveryStatus) -> &'static str {
    match status {
        DeliveryStatus::Created => "CREATED",
    }
}

#[async_trait]
impl DeliveriesRepository for PostgresDeliveriesRepository {
    async fn create(&self, delivery: &Delivery) -> Result<Delivery, DeliveryRepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO deliveries (
                id, transaction_id, product_id, status,
                address, city, phone, full_name
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(delivery.id.as_uuid())
        .bind(delivery.transaction_id.as_uuid())
        .bind(delivery.product_id.as_str())
        .bind(status_to_string(delivery.status))
        .bind(&delivery.address)
        .bind(&delivery.city)
        .bind(&delivery.phone)
        .bind(&delivery.full_name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("deliveries_pkey") {
                    return DeliveryRepositoryError::AlreadyExists;
                }
            }
            DeliveryRepositoryError::DatabaseError(format!("failed to create delivery: {}", e))
        })?;

        Ok(delivery.clone())
    }
}
