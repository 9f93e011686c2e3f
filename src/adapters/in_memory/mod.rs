//! In-Memory Repository Adapters
//!
//! Map-backed implementations of all four repository ports. Useful for
//! tests and local development. Each store is an injected object with
//! its own `RwLock`-guarded state; the stock decrement does its
//! read-check-write inside one write-lock critical section (the
//! serialization required by the port contract).

mod deliveries_repository;
mod product_repository;
mod stock_repository;
mod transactions_repository;

pub use deliveries_repository::InMemoryDeliveriesRepository;
pub use product_repository::InMemoryProductRepository;
pub use stock_repository::InMemoryStockRepository;
pub use transactions_repository::InMemoryTransactionsRepository;
