//! ConfirmCheckoutHandler - the checkout state machine.
//!
//! Drives a PENDING transaction to its terminal state: loads it, checks
//! the idempotency guard, charges the card, and on success decrements
//! stock and creates the delivery record before persisting SUCCESS.
//!
//! Side-effect ordering is load-bearing:
//! - payment before any inventory or delivery write, so a declined card
//!   never touches stock;
//! - stock before delivery, so an inventory shortfall is caught before
//!   a delivery is committed;
//! - the idempotency guard before any external call, so repeated
//!   confirmations are free of side effects.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::checkout::{Delivery, Transaction};
use crate::domain::foundation::{DeliveryId, Timestamp, TransactionId};
use crate::ports::{
    CreatePaymentRequest, DeliveriesRepository, PaymentProvider, PaymentStatus, StockRepository,
    TransactionsRepository,
};

/// Raw card fields collected by the client.
#[derive(Debug, Clone)]
pub struct CardDetails {
    pub card_number: String,
    pub card_exp_month: String,
    pub card_exp_year: String,
    pub card_cvc: String,
    pub card_holder: String,
}

/// Command to confirm a started checkout.
#[derive(Debug, Clone)]
pub struct ConfirmCheckoutCommand {
    pub transaction_id: TransactionId,
    pub payment: CardDetails,
}

/// Result of a completed confirm call.
///
/// Carries the transaction in whatever state the call drove it to —
/// including FAILED: a declined payment is a completed checkout
/// attempt, not a use-case error.
#[derive(Debug, Clone)]
pub struct ConfirmCheckoutResult {
    pub transaction: Transaction,
}

/// Errors that abort a confirm-checkout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfirmCheckoutError {
    #[error("transaction not found")]
    TransactionNotFound,

    /// Stock ran out after the payment settled. Exceptional: the
    /// customer was charged and no unit was reserved.
    #[error("insufficient stock")]
    InsufficientStock,

    #[error("database error")]
    DatabaseError,
}

/// Fixed failure reason recorded when stock runs out post-payment.
const STOCK_DECREMENT_FAILED: &str = "Stock decrement failed";

/// Handler for confirming a checkout.
pub struct ConfirmCheckoutHandler {
    transactions: Arc<dyn TransactionsRepository>,
    payment_provider: Arc<dyn PaymentProvider>,
    stock: Arc<dyn StockRepository>,
    deliveries: Arc<dyn DeliveriesRepository>,
    settlement_currency: String,
}

impl ConfirmCheckoutHandler {
    pub fn new(
        transactions: Arc<dyn TransactionsRepository>,
        payment_provider: Arc<dyn PaymentProvider>,
        stock: Arc<dyn StockRepository>,
        deliveries: Arc<dyn DeliveriesRepository>,
        settlement_currency: impl Into<String>,
    ) -> Self {
        Self {
            transactions,
            payment_provider,
            stock,
            deliveries,
            settlement_currency: settlement_currency.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: ConfirmCheckoutCommand,
    ) -> Result<ConfirmCheckoutResult, ConfirmCheckoutError> {
        // 1. Load the transaction
        let mut transaction = self
            .transactions
            .get_by_id(&cmd.transaction_id)
            .await
            .map_err(|_| ConfirmCheckoutError::DatabaseError)?
            .ok_or(ConfirmCheckoutError::TransactionNotFound)?;

        // 2. Idempotency guard: terminal transactions are returned as-is,
        // before any external call.
        if transaction.is_terminal() {
            return Ok(ConfirmCheckoutResult { transaction });
        }

        // 3. Charge the card for the fixed total
        let response = match self
            .payment_provider
            .create_card_payment(CreatePaymentRequest {
                amount: transaction.total,
                currency: self.settlement_currency.clone(),
                card_number: cmd.payment.card_number,
                card_exp_month: cmd.payment.card_exp_month,
                card_exp_year: cmd.payment.card_exp_year,
                card_cvc: cmd.payment.card_cvc,
                card_holder: cmd.payment.card_holder,
            })
            .await
        {
            Ok(response) => response,
            Err(err) => {
                // Port-level failure: the provider could not be asked.
                // The checkout attempt still completed - as FAILED.
                transaction.mark_failed(err.code(), None, Timestamp::now());
                let transaction = self
                    .transactions
                    .update(&transaction)
                    .await
                    .map_err(|_| ConfirmCheckoutError::DatabaseError)?;
                tracing::warn!(
                    transaction_id = %transaction.id,
                    reason = err.code(),
                    "payment provider error, transaction failed"
                );
                return Ok(ConfirmCheckoutResult { transaction });
            }
        };

        match response.status {
            PaymentStatus::Failed => {
                let reason = response
                    .failure_reason
                    .unwrap_or_else(|| "Payment declined".to_string());
                transaction.mark_failed(
                    reason,
                    Some(response.provider_transaction_id),
                    Timestamp::now(),
                );
                let transaction = self
                    .transactions
                    .update(&transaction)
                    .await
                    .map_err(|_| ConfirmCheckoutError::DatabaseError)?;
                tracing::warn!(
                    transaction_id = %transaction.id,
                    reason = transaction.failure_reason.as_deref().unwrap_or_default(),
                    "payment declined"
                );
                return Ok(ConfirmCheckoutResult { transaction });
            }
            PaymentStatus::Processing => {
                // Settlement is pending at the provider. Nothing is
                // persisted; the caller polls the transaction status.
                return Ok(ConfirmCheckoutResult { transaction });
            }
            PaymentStatus::Success => {}
        }

        // 4. Payment settled: take exactly one unit of stock
        if self.stock.decrement(&transaction.product_id, 1).await.is_err() {
            transaction.mark_failed(STOCK_DECREMENT_FAILED, None, Timestamp::now());
            if let Err(update_err) = self.transactions.update(&transaction).await {
                tracing::error!(
                    transaction_id = %transaction.id,
                    error = %update_err,
                    "failed to persist FAILED state after stock shortfall"
                );
            }
            tracing::error!(
                transaction_id = %transaction.id,
                product_id = %transaction.product_id,
                "payment settled but stock decrement failed"
            );
            return Err(ConfirmCheckoutError::InsufficientStock);
        }

        // 5. Commit the delivery record
        let delivery = Delivery::for_transaction(DeliveryId::new(), &transaction);
        if let Err(err) = self.deliveries.create(&delivery).await {
            // Payment and stock are already committed; nothing is rolled
            // back here. Operator reconciliation territory.
            tracing::error!(
                transaction_id = %transaction.id,
                error = %err,
                "payment settled and stock decremented but delivery creation failed"
            );
            return Err(ConfirmCheckoutError::DatabaseError);
        }

        // 6. Persist the terminal SUCCESS state
        transaction.mark_success(response.provider_transaction_id, Timestamp::now());
        let transaction = self
            .transactions
            .update(&transaction)
            .await
            .map_err(|_| ConfirmCheckoutError::DatabaseError)?;

        tracing::info!(
            transaction_id = %transaction.id,
            provider_transaction_id =
                transaction.provider_transaction_id.as_deref().unwrap_or_default(),
            total = transaction.total,
            "checkout confirmed"
        );

        Ok(ConfirmCheckoutResult { transaction })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkout::{CustomerInfo, TransactionStatus};
    use crate::domain::foundation::ProductId;
    use crate::ports::{
        DeliveryRepositoryError, PaymentProviderError, PaymentResponse, StockRepositoryError,
        TransactionRepositoryError,
    };
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Call Log
    // ════════════════════════════════════════════════════════════════════════════

    /// Shared log of port invocations, for ordering assertions.
    #[derive(Clone, Default)]
    struct CallLog(Arc<Mutex<Vec<&'static str>>>);

    impl CallLog {
        fn record(&self, call: &'static str) {
            self.0.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.0.lock().unwrap().clone()
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct MockTransactionsRepository {
        store: Mutex<HashMap<TransactionId, Transaction>>,
        fail_get: bool,
        fail_update: bool,
        log: CallLog,
    }

    impl MockTransactionsRepository {
        fn with_transaction(transaction: Transaction, log: CallLog) -> Self {
            let mut store = HashMap::new();
            store.insert(transaction.id, transaction);
            Self {
                store: Mutex::new(store),
                fail_get: false,
                fail_update: false,
                log,
            }
        }

        fn empty(log: CallLog) -> Self {
            Self {
                store: Mutex::new(HashMap::new()),
                fail_get: false,
                fail_update: false,
                log,
            }
        }

        fn persisted(&self, id: &TransactionId) -> Option<Transaction> {
            self.store.lock().unwrap().get(id).cloned()
        }
    }

    #[async_trait]
    impl TransactionsRepository for MockTransactionsRepository {
        async fn create_pending(
            &self,
            transaction: &Transaction,
        ) -> Result<Transaction, TransactionRepositoryError> {
            self.store
                .lock()
                .unwrap()
                .insert(transaction.id, transaction.clone());
            Ok(transaction.clone())
        }

        async fn update(
            &self,
            transaction: &Transaction,
        ) -> Result<Transaction, TransactionRepositoryError> {
            self.log.record("transactions.update");
            if self.fail_update {
                return Err(TransactionRepositoryError::DatabaseError(
                    "simulated update failure".to_string(),
                ));
            }
            self.store
                .lock()
                .unwrap()
                .insert(transaction.id, transaction.clone());
            Ok(transaction.clone())
        }

        async fn get_by_id(
            &self,
            id: &TransactionId,
        ) -> Result<Option<Transaction>, TransactionRepositoryError> {
            self.log.record("transactions.get");
            if self.fail_get {
                return Err(TransactionRepositoryError::DatabaseError(
                    "simulated lookup failure".to_string(),
                ));
            }
            Ok(self.store.lock().unwrap().get(id).cloned())
        }
    }

    struct MockPaymentProvider {
        outcome: Result<PaymentResponse, PaymentProviderError>,
        log: CallLog,
    }

    impl MockPaymentProvider {
        fn approving(log: CallLog) -> Self {
            Self {
                outcome: Ok(PaymentResponse {
                    provider_transaction_id: "prov-123".to_string(),
                    status: PaymentStatus::Success,
                    failure_reason: None,
                }),
                log,
            }
        }

        fn with_outcome(
            outcome: Result<PaymentResponse, PaymentProviderError>,
            log: CallLog,
        ) -> Self {
            Self { outcome, log }
        }
    }

    #[async_trait]
    impl PaymentProvider for MockPaymentProvider {
        async fn create_card_payment(
            &self,
            _request: CreatePaymentRequest,
        ) -> Result<PaymentResponse, PaymentProviderError> {
            self.log.record("payment.create");
            self.outcome.clone()
        }
    }

    struct MockStockRepository {
        units: Mutex<i64>,
        fail: Option<StockRepositoryError>,
        log: CallLog,
    }

    impl MockStockRepository {
        fn with_units(units: i64, log: CallLog) -> Self {
            Self {
                units: Mutex::new(units),
                fail: None,
                log,
            }
        }

        fn failing(error: StockRepositoryError, log: CallLog) -> Self {
            Self {
                units: Mutex::new(0),
                fail: Some(error),
                log,
            }
        }

        fn units(&self) -> i64 {
            *self.units.lock().unwrap()
        }
    }

    #[async_trait]
    impl StockRepository for MockStockRepository {
        async fn get_units(&self, _product_id: &ProductId) -> Option<i64> {
            Some(self.units())
        }

        async fn decrement(
            &self,
            _product_id: &ProductId,
            by: i64,
        ) -> Result<(), StockRepositoryError> {
            self.log.record("stock.decrement");
            if let Some(err) = &self.fail {
                return Err(err.clone());
            }
            *self.units.lock().unwrap() -= by;
            Ok(())
        }
    }

    struct MockDeliveriesRepository {
        created: Mutex<Vec<Delivery>>,
        fail: bool,
        log: CallLog,
    }

    impl MockDeliveriesRepository {
        fn new(log: CallLog) -> Self {
            Self {
                created: Mutex::new(Vec::new()),
                fail: false,
                log,
            }
        }

        fn failing(log: CallLog) -> Self {
            Self {
                created: Mutex::new(Vec::new()),
                fail: true,
                log,
            }
        }

        fn created(&self) -> Vec<Delivery> {
            self.created.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DeliveriesRepository for MockDeliveriesRepository {
        async fn create(&self, delivery: &Delivery) -> Result<Delivery, DeliveryRepositoryError> {
            self.log.record("deliveries.create");
            if self.fail {
                return Err(DeliveryRepositoryError::DatabaseError(
                    "simulated create failure".to_string(),
                ));
            }
            self.created.lock().unwrap().push(delivery.clone());
            Ok(delivery.clone())
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn pending_transaction() -> Transaction {
        Transaction::pending(
            TransactionId::new(),
            ProductId::new("product-1"),
            20000,
            5000,
            3000,
            CustomerInfo {
                full_name: "Jane Roe".to_string(),
                phone: "3001234567".to_string(),
                address: "Calle 1 # 2-3".to_string(),
                city: "Bogota".to_string(),
            },
            Timestamp::now(),
        )
    }

    fn test_command(transaction_id: TransactionId) -> ConfirmCheckoutCommand {
        ConfirmCheckoutCommand {
            transaction_id,
            payment: CardDetails {
                card_number: "4242424242424242".to_string(),
                card_exp_month: "08".to_string(),
                card_exp_year: "2028".to_string(),
                card_cvc: "123".to_string(),
                card_holder: "Jane Roe".to_string(),
            },
        }
    }

    struct Fixture {
        transactions: Arc<MockTransactionsRepository>,
        stock: Arc<MockStockRepository>,
        deliveries: Arc<MockDeliveriesRepository>,
        handler: ConfirmCheckoutHandler,
        log: CallLog,
    }

    fn fixture(
        transaction: Transaction,
        provider_outcome: Result<PaymentResponse, PaymentProviderError>,
    ) -> Fixture {
        let log = CallLog::default();
        let transactions = Arc::new(MockTransactionsRepository::with_transaction(
            transaction,
            log.clone(),
        ));
        let stock = Arc::new(MockStockRepository::with_units(12, log.clone()));
        let deliveries = Arc::new(MockDeliveriesRepository::new(log.clone()));
        let handler = ConfirmCheckoutHandler::new(
            transactions.clone(),
            Arc::new(MockPaymentProvider::with_outcome(
                provider_outcome,
                log.clone(),
            )),
            stock.clone(),
            deliveries.clone(),
            "COP",
        );
        Fixture {
            transactions,
            stock,
            deliveries,
            handler,
            log,
        }
    }

    fn approved() -> Result<PaymentResponse, PaymentProviderError> {
        Ok(PaymentResponse {
            provider_transaction_id: "prov-123".to_string(),
            status: PaymentStatus::Success,
            failure_reason: None,
        })
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Path
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn confirms_checkout_end_to_end() {
        let tx = pending_transaction();
        let id = tx.id;
        let f = fixture(tx, approved());

        let result = f.handler.handle(test_command(id)).await.unwrap();

        assert_eq!(result.transaction.status, TransactionStatus::Success);
        assert_eq!(
            result.transaction.provider_transaction_id.as_deref(),
            Some("prov-123")
        );

        // exactly one unit taken, exactly one delivery created
        assert_eq!(f.stock.units(), 11);
        let deliveries = f.deliveries.created();
        assert_eq!(deliveries.len(), 1);
        assert_eq!(deliveries[0].transaction_id, id);
        assert_eq!(deliveries[0].full_name, "Jane Roe");

        // terminal state durably recorded
        let persisted = f.transactions.persisted(&id).unwrap();
        assert_eq!(persisted.status, TransactionStatus::Success);
    }

    #[tokio::test]
    async fn side_effects_run_in_contract_order() {
        let tx = pending_transaction();
        let id = tx.id;
        let f = fixture(tx, approved());

        f.handler.handle(test_command(id)).await.unwrap();

        assert_eq!(
            f.log.calls(),
            vec![
                "transactions.get",
                "payment.create",
                "stock.decrement",
                "deliveries.create",
                "transactions.update",
            ]
        );
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Idempotency Guard
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn reconfirming_success_is_a_no_op() {
        let mut tx = pending_transaction();
        tx.mark_success("prov-old", Timestamp::now());
        let id = tx.id;
        let f = fixture(tx.clone(), approved());

        let result = f.handler.handle(test_command(id)).await.unwrap();

        assert_eq!(result.transaction, tx);
        assert_eq!(f.log.calls(), vec!["transactions.get"]);
        assert_eq!(f.stock.units(), 12);
        assert!(f.deliveries.created().is_empty());
    }

    #[tokio::test]
    async fn reconfirming_failed_is_a_no_op() {
        let mut tx = pending_transaction();
        tx.mark_failed("Card declined", Some("prov-old".to_string()), Timestamp::now());
        let id = tx.id;
        let f = fixture(tx.clone(), approved());

        let result = f.handler.handle(test_command(id)).await.unwrap();

        assert_eq!(result.transaction, tx);
        assert_eq!(f.log.calls(), vec!["transactions.get"]);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Provider Outcomes
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn provider_port_error_fails_transaction_with_code() {
        let tx = pending_transaction();
        let id = tx.id;
        let f = fixture(tx, Err(PaymentProviderError::CardDeclined));

        let result = f.handler.handle(test_command(id)).await.unwrap();

        assert_eq!(result.transaction.status, TransactionStatus::Failed);
        assert_eq!(
            result.transaction.failure_reason.as_deref(),
            Some("CARD_DECLINED")
        );
        assert_eq!(result.transaction.provider_transaction_id, None);

        // no inventory or delivery side effects
        assert_eq!(f.stock.units(), 12);
        assert!(f.deliveries.created().is_empty());
        assert_eq!(
            f.log.calls(),
            vec!["transactions.get", "payment.create", "transactions.update"]
        );
    }

    #[tokio::test]
    async fn business_decline_fails_transaction_with_reason() {
        let tx = pending_transaction();
        let id = tx.id;
        let f = fixture(
            tx,
            Ok(PaymentResponse {
                provider_transaction_id: "prov-456".to_string(),
                status: PaymentStatus::Failed,
                failure_reason: Some("Card declined".to_string()),
            }),
        );

        let result = f.handler.handle(test_command(id)).await.unwrap();

        assert_eq!(result.transaction.status, TransactionStatus::Failed);
        assert_eq!(
            result.transaction.failure_reason.as_deref(),
            Some("Card declined")
        );
        assert_eq!(
            result.transaction.provider_transaction_id.as_deref(),
            Some("prov-456")
        );

        assert_eq!(f.stock.units(), 12);
        assert!(f.deliveries.created().is_empty());

        let persisted = f.transactions.persisted(&id).unwrap();
        assert_eq!(persisted.status, TransactionStatus::Failed);
    }

    #[tokio::test]
    async fn processing_returns_pending_and_persists_nothing() {
        let tx = pending_transaction();
        let id = tx.id;
        let f = fixture(
            tx,
            Ok(PaymentResponse {
                provider_transaction_id: "prov-789".to_string(),
                status: PaymentStatus::Processing,
                failure_reason: None,
            }),
        );

        let result = f.handler.handle(test_command(id)).await.unwrap();

        assert_eq!(result.transaction.status, TransactionStatus::Pending);
        assert_eq!(result.transaction.provider_transaction_id, None);

        // no writes of any kind
        assert_eq!(f.log.calls(), vec!["transactions.get", "payment.create"]);
        assert_eq!(f.stock.units(), 12);
        assert!(f.deliveries.created().is_empty());

        let persisted = f.transactions.persisted(&id).unwrap();
        assert_eq!(persisted.status, TransactionStatus::Pending);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Post-Payment Failures
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn stock_shortfall_after_payment_is_reported_and_persisted() {
        let tx = pending_transaction();
        let id = tx.id;

        let log = CallLog::default();
        let transactions = Arc::new(MockTransactionsRepository::with_transaction(
            tx,
            log.clone(),
        ));
        let deliveries = Arc::new(MockDeliveriesRepository::new(log.clone()));
        let handler = ConfirmCheckoutHandler::new(
            transactions.clone(),
            Arc::new(MockPaymentProvider::approving(log.clone())),
            Arc::new(MockStockRepository::failing(
                StockRepositoryError::InsufficientStock,
                log.clone(),
            )),
            deliveries.clone(),
            "COP",
        );

        let result = handler.handle(test_command(id)).await;

        assert_eq!(result.unwrap_err(), ConfirmCheckoutError::InsufficientStock);

        // transaction durably FAILED with the fixed reason
        let persisted = transactions.persisted(&id).unwrap();
        assert_eq!(persisted.status, TransactionStatus::Failed);
        assert_eq!(
            persisted.failure_reason.as_deref(),
            Some("Stock decrement failed")
        );

        // delivery creation never reached
        assert!(deliveries.created().is_empty());
    }

    #[tokio::test]
    async fn delivery_create_failure_maps_to_database_error() {
        let tx = pending_transaction();
        let id = tx.id;

        let log = CallLog::default();
        let transactions = Arc::new(MockTransactionsRepository::with_transaction(
            tx,
            log.clone(),
        ));
        let handler = ConfirmCheckoutHandler::new(
            transactions.clone(),
            Arc::new(MockPaymentProvider::approving(log.clone())),
            Arc::new(MockStockRepository::with_units(12, log.clone())),
            Arc::new(MockDeliveriesRepository::failing(log.clone())),
            "COP",
        );

        let result = handler.handle(test_command(id)).await;

        assert_eq!(result.unwrap_err(), ConfirmCheckoutError::DatabaseError);

        // the transaction was never marked SUCCESS
        let persisted = transactions.persisted(&id).unwrap();
        assert_eq!(persisted.status, TransactionStatus::Pending);
    }

    #[tokio::test]
    async fn final_update_failure_maps_to_database_error() {
        let tx = pending_transaction();
        let id = tx.id;

        let log = CallLog::default();
        let mut repo = MockTransactionsRepository::with_transaction(tx, log.clone());
        repo.fail_update = true;
        let handler = ConfirmCheckoutHandler::new(
            Arc::new(repo),
            Arc::new(MockPaymentProvider::approving(log.clone())),
            Arc::new(MockStockRepository::with_units(12, log.clone())),
            Arc::new(MockDeliveriesRepository::new(log.clone())),
            "COP",
        );

        let result = handler.handle(test_command(id)).await;

        assert_eq!(result.unwrap_err(), ConfirmCheckoutError::DatabaseError);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Load Failures
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn repository_lookup_failure_maps_to_database_error() {
        let log = CallLog::default();
        let mut repo = MockTransactionsRepository::empty(log.clone());
        repo.fail_get = true;
        let handler = ConfirmCheckoutHandler::new(
            Arc::new(repo),
            Arc::new(MockPaymentProvider::approving(log.clone())),
            Arc::new(MockStockRepository::with_units(12, log.clone())),
            Arc::new(MockDeliveriesRepository::new(log.clone())),
            "COP",
        );

        let result = handler.handle(test_command(TransactionId::new())).await;

        assert_eq!(result.unwrap_err(), ConfirmCheckoutError::DatabaseError);
    }

    #[tokio::test]
    async fn unknown_transaction_maps_to_not_found() {
        let log = CallLog::default();
        let handler = ConfirmCheckoutHandler::new(
            Arc::new(MockTransactionsRepository::empty(log.clone())),
            Arc::new(MockPaymentProvider::approving(log.clone())),
            Arc::new(MockStockRepository::with_units(12, log.clone())),
            Arc::new(MockDeliveriesRepository::new(log.clone())),
            "COP",
        );

        let result = handler.handle(test_command(TransactionId::new())).await;

        assert_eq!(
            result.unwrap_err(),
            ConfirmCheckoutError::TransactionNotFound
        );
        assert_eq!(log.calls(), vec!["transactions.get"]);
    }
}
