//! Mock payment provider for testing and local development.
//!
//! Provides a configurable implementation of `PaymentProvider`:
//! - scripted responses, consumed in order
//! - error injection
//! - call tracking for assertions
//!
//! With no script configured it approves every payment, which is the
//! behavior local development wants.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::ports::{
    CreatePaymentRequest, PaymentProvider, PaymentProviderError, PaymentResponse, PaymentStatus,
};

/// Mock payment provider.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentProvider::new();
/// mock.enqueue(Ok(PaymentResponse {
///     provider_transaction_id: "mock-1".into(),
///     status: PaymentStatus::Failed,
///     failure_reason: Some("Card declined".into()),
/// }));
///
/// let result = mock.create_card_payment(request).await;
/// assert_eq!(mock.requests().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockPaymentProvider {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Outcomes to return, in order. Empty means approve everything.
    script: VecDeque<Result<PaymentResponse, PaymentProviderError>>,

    /// Every request received, for assertions.
    requests: Vec<CreatePaymentRequest>,
}

impl MockPaymentProvider {
    /// Create a mock that approves every payment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose first payment fails with the given reason.
    pub fn declining(reason: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.enqueue(Ok(PaymentResponse {
            provider_transaction_id: format!("mock-{}", Uuid::new_v4().simple()),
            status: PaymentStatus::Failed,
            failure_reason: Some(reason.into()),
        }));
        mock
    }

    /// Create a mock whose first call fails at the port level.
    pub fn erroring(error: PaymentProviderError) -> Self {
        let mock = Self::new();
        mock.enqueue(Err(error));
        mock
    }

    /// Queue the outcome for the next payment attempt.
    pub fn enqueue(&self, outcome: Result<PaymentResponse, PaymentProviderError>) {
        self.inner.lock().unwrap().script.push_back(outcome);
    }

    /// All payment requests received so far.
    pub fn requests(&self) -> Vec<CreatePaymentRequest> {
        self.inner.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_card_payment(
        &self,
        request: CreatePaymentRequest,
    ) -> Result<PaymentResponse, PaymentProviderError> {
        let mut state = self.inner.lock().unwrap();
        state.requests.push(request);

        state.script.pop_front().unwrap_or_else(|| {
            Ok(PaymentResponse {
                provider_transaction_id: format!("mock-{}", Uuid::new_v4().simple()),
                status: PaymentStatus::Success,
                failure_reason: None,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_request() -> CreatePaymentRequest {
        CreatePaymentRequest {
            amount: 28000,
            currency: "COP".to_string(),
            card_number: "4242424242424242".to_string(),
            card_exp_month: "08".to_string(),
            card_exp_year: "2028".to_string(),
            card_cvc: "123".to_string(),
            card_holder: "Jane Roe".to_string(),
        }
    }

    #[tokio::test]
    async fn approves_by_default() {
        let mock = MockPaymentProvider::new();

        let response = mock.create_card_payment(test_request()).await.unwrap();

        assert_eq!(response.status, PaymentStatus::Success);
        assert!(response.provider_transaction_id.starts_with("mock-"));
    }

    #[tokio::test]
    async fn scripted_outcomes_are_consumed_in_order() {
        let mock = MockPaymentProvider::declining("Card declined");

        let first = mock.create_card_payment(test_request()).await.unwrap();
        let second = mock.create_card_payment(test_request()).await.unwrap();

        assert_eq!(first.status, PaymentStatus::Failed);
        assert_eq!(first.failure_reason.as_deref(), Some("Card declined"));
        // script exhausted, back to approving
        assert_eq!(second.status, PaymentStatus::Success);
    }

    #[tokio::test]
    async fn records_requests() {
        let mock = MockPaymentProvider::erroring(PaymentProviderError::ProviderUnavailable);

        let result = mock.create_card_payment(test_request()).await;

        assert_eq!(result.unwrap_err(), PaymentProviderError::ProviderUnavailable);
        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].amount, 28000);
        assert_eq!(requests[0].currency, "COP");
    }
}
