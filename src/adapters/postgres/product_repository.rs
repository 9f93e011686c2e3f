//! PostgreSQL implementation of ProductRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::catalog::Product;
use crate::domain::foundation::ProductId;
use crate::ports::ProductRepository;

/// PostgreSQL-backed product store.
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    /// Creates a repository over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a product.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: String,
    name: String,
    description: String,
    price: i64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
        }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn get_by_id(&self, product_id: &ProductId) -> Option<Product> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(product_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            // The port has no error channel; an unreadable product is a miss.
            tracing::error!(product_id = %product_id, error = %e, "product lookup failed");
            None
        });

        row.map(Product::from)
    }
}
