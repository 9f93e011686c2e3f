//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the use cases and the outside world. Adapters implement these ports;
//! the use cases depend only on the traits, so any collaborator can be
//! replaced by a test double.
//!
//! ## Repository Ports
//!
//! - `ProductRepository` - read-only product lookups
//! - `StockRepository` - unit counts and the atomic `decrement`
//! - `TransactionsRepository` - transaction lifecycle persistence
//! - `DeliveriesRepository` - delivery record creation
//!
//! ## Provider Ports
//!
//! - `PaymentProvider` - card payment initiation

mod deliveries_repository;
mod payment_provider;
mod product_repository;
mod stock_repository;
mod transactions_repository;

pub use deliveries_repository::{DeliveriesRepository, DeliveryRepositoryError};
pub use payment_provider::{
    CreatePaymentRequest, PaymentProvider, PaymentProviderError, PaymentResponse, PaymentStatus,
};
pub use product_repository::ProductRepository;
pub use stock_repository::{StockRepository, StockRepositoryError};
pub use transactions_repository::{TransactionRepositoryError, TransactionsRepository};
