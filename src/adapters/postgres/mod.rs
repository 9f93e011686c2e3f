//! PostgreSQL Repository Adapters
//!
//! Persistent implementations of all four repository ports using sqlx
//! with connection pooling. Schema lives in `migrations/`.

mod deliveries_repository;
mod product_repository;
mod stock_repository;
mod transactions_repository;

pub use deliveries_repository::PostgresDeliveriesRepository;
pub use product_repository::PostgresProductRepository;
pub use stock_repository::PostgresStockRepository;
pub use transactions_repository::PostgresTransactionsRepository;
