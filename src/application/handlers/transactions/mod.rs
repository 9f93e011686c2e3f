//! Transaction query handlers.

mod get_transaction_status;

pub use get_transaction_status::{
    GetTransactionStatusError, GetTransactionStatusHandler, GetTransactionStatusQuery,
};
