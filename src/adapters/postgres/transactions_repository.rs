//! PostgreSQL implementation of TransactionsRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::checkout::{CustomerInfo, Transaction, TransactionStatus};
use crate::domain::foundation::{ProductId, Timestamp, TransactionId};
use crate::ports::{TransactionRepositoryError, TransactionsRepository};

/// PostgreSQL-backed transaction store.
pub struct PostgresTransactionsRepository {
    pool: PgPool,
}

impl PostgresTransactionsRepository {
    /// Creates a repository over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a transaction.
#[derive(Debug, sqlx::FromRow)]
struct TransactionRow {
    id: Uuid,
    product_id: String,
    status: String,
    amount: i64,
    base_fee: i64,
    delivery_fee: i64,
    total: i64,
    provider: String,
    provider_transaction_id: Option<String>,
    failure_reason: Option<String>,
    customer_full_name: String,
    customer_phone: String,
    customer_address: String,
    customer_city: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TransactionRow> for Transaction {
    type Error = TransactionRepositoryError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        Ok(Transaction {
            id: TransactionId::from_uuid(row.id),
            product_id: ProductId::new(row.product_id),
            status: parse_status(&row.status)?,
            amount: row.amount,
            base_fee: row.base_fee,
            delivery_fee: row.delivery_fee,
            total: row.total,
            provider: row.provider,
            provider_transaction_id: row.provider_transaction_id,
            failure_reason: row.failure_reason,
            customer: CustomerInfo {
                full_name: row.customer_full_name,
                phone: row.customer_phone,
                address: row.customer_address,
                city: row.customer_city,
            },
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

fn parse_status(s: &str) -> Result<TransactionStatus, TransactionRepositoryError> {
    match s {
        "PENDING" => Ok(TransactionStatus::Pending),
        "SUCCESS" => Ok(TransactionStatus::Success),
        "FAILED" => Ok(TransactionStatus::Failed),
        _ => Err(TransactionRepositoryError::DatabaseError(format!(
            "invalid status value: {}",
            s
        ))),
    }
}

fn status_to_string(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Pending => "PENDING",
        TransactionStatus::Success => "SUCCESS",
        TransactionStatus::Failed => "FAILED",
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, product_id, status, amount, base_fee, delivery_fee, total,
           provider, provider_transaction_id, failure_reason,
           customer_full_name, customer_phone, customer_address, customer_city,
           created_at, updated_at
    FROM transactions
"#;

#[async_trait]
impl TransactionsRepository for PostgresTransactionsRepository {
    async fn create_pending(
        &self,
        transaction: &Transaction,
    ) -> Result<Transaction, TransactionRepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO transactions (
                id, product_id, status, amount, base_fee, delivery_fee, total,
                provider, provider_transaction_id, failure_reason,
                customer_full_name, customer_phone, customer_address, customer_city,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            "#,
        )
        .bind(transaction.id.as_uuid())
        .bind(transaction.product_id.as_str())
        .bind(status_to_string(transaction.status))
        .bind(transaction.amount)
        .bind(transaction.base_fee)
        .bind(transaction.delivery_fee)
        .bind(transaction.total)
        .bind(&transaction.provider)
        .bind(&transaction.provider_transaction_id)
        .bind(&transaction.failure_reason)
        .bind(&transaction.customer.full_name)
        .bind(&transaction.customer.phone)
        .bind(&transaction.customer.address)
        .bind(&transaction.customer.city)
        .bind(transaction.created_at.as_datetime())
        .bind(transaction.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("transactions_pkey") {
                    return TransactionRepositoryError::AlreadyExists;
                }
            }
            TransactionRepositoryError::DatabaseError(format!(
                "failed to create transaction: {}",
                e
            ))
        })?;

        Ok(transaction.clone())
    }

    async fn update(
        &self,
        transaction: &Transaction,
    ) -> Result<Transaction, TransactionRepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE transactions SET
                status = $2,
                provider_transaction_id = $3,
                failure_reason = $4,
                updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(transaction.id.as_uuid())
        .bind(status_to_string(transaction.status))
        .bind(&transaction.provider_transaction_id)
        .bind(&transaction.failure_reason)
        .bind(transaction.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            TransactionRepositoryError::DatabaseError(format!(
                "failed to update transaction: {}",
                e
            ))
        })?;

        if result.rows_affected() == 0 {
            return Err(TransactionRepositoryError::NotFound);
        }

        Ok(transaction.clone())
    }

    async fn get_by_id(
        &self,
        id: &TransactionId,
    ) -> Result<Option<Transaction>, TransactionRepositoryError> {
        let row: Option<TransactionRow> =
            sqlx::query_as(&format!("{} WHERE id = $1", SELECT_COLUMNS))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    TransactionRepositoryError::DatabaseError(format!(
                        "failed to load transaction: {}",
                        e
                    ))
                })?;

        row.map(Transaction::try_from).transpose()
    }
}
