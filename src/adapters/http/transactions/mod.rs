//! Transactions HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::transactions_routes;
