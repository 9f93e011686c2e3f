//! Checkout command handlers: the start/confirm use-case pair.

mod confirm_checkout;
mod start_checkout;

pub use confirm_checkout::{
    CardDetails, ConfirmCheckoutCommand, ConfirmCheckoutError, ConfirmCheckoutHandler,
    ConfirmCheckoutResult,
};
pub use start_checkout::{
    StartCheckoutCommand, StartCheckoutError, StartCheckoutHandler, StartCheckoutResult,
};
