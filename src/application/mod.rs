//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between
//! ports. Command handlers (start/confirm checkout) own the write
//! paths; query handlers (product, transaction status) compose reads.

pub mod handlers;

pub use handlers::{
    // Checkout handlers
    CardDetails, ConfirmCheckoutCommand, ConfirmCheckoutError, ConfirmCheckoutHandler,
    ConfirmCheckoutResult, StartCheckoutCommand, StartCheckoutError, StartCheckoutHandler,
    StartCheckoutResult,
    // Read handlers
    GetProductByIdHandler, GetProductByIdQuery, GetProductError, GetTransactionStatusError,
    GetTransactionStatusHandler, GetTransactionStatusQuery, ProductWithStock,
};
