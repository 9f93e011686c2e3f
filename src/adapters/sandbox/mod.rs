//! Sandbox payment gateway adapters.
//!
//! `SandboxPaymentAdapter` talks to the real sandbox gateway over HTTP;
//! `MockPaymentProvider` is the scriptable stand-in for tests and local
//! development.

mod mock_payment_provider;
mod sandbox_adapter;

pub use mock_payment_provider::MockPaymentProvider;
pub use sandbox_adapter::{SandboxConfig, SandboxPaymentAdapter};
