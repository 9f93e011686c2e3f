//! Quickcart server entry point.
//!
//! Loads configuration, wires the repository and payment adapters the
//! configuration selects, and serves the checkout API.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use quickcart::adapters::http::{api_router, AppState};
use quickcart::adapters::in_memory::{
    InMemoryDeliveriesRepository, InMemoryProductRepository, InMemoryStockRepository,
    InMemoryTransactionsRepository,
};
use quickcart::adapters::postgres::{
    PostgresDeliveriesRepository, PostgresProductRepository, PostgresStockRepository,
    PostgresTransactionsRepository,
};
use quickcart::adapters::sandbox::{MockPaymentProvider, SandboxConfig, SandboxPaymentAdapter};
use quickcart::config::{AppConfig, PaymentMode, StorageBackend};
use quickcart::domain::catalog::Product;
use quickcart::domain::foundation::ProductId;
use quickcart::ports::PaymentProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let state = build_state(&config).await?;
    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "quickcart listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone()));

    if config.server.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Wire the adapters the configuration selects into the shared state.
async fn build_state(config: &AppConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    let payment_provider: Arc<dyn PaymentProvider> = match config.payment.mode {
        PaymentMode::Mock => {
            tracing::info!("payment provider: mock (approves everything)");
            Arc::new(MockPaymentProvider::new())
        }
        PaymentMode::Sandbox => Arc::new(SandboxPaymentAdapter::new(SandboxConfig::new(
            config.payment.sandbox_base_url.clone(),
            config.payment.sandbox_public_key.clone(),
            config.payment.sandbox_private_key.clone(),
            config.payment.sandbox_integrity_key.clone(),
        ))),
    };

    let state = match config.database.backend {
        StorageBackend::Memory => {
            tracing::info!("storage backend: in-memory (demo catalog seeded)");
            let demo = Product {
                id: ProductId::new("product-1"),
                name: "Demo Product".to_string(),
                description: "Example product for testing payment flow".to_string(),
                price: 20000,
            };
            let products = InMemoryProductRepository::with_products([demo.clone()]);
            let stock = InMemoryStockRepository::with_stock([(demo.id, 100)]);

            AppState {
                products: Arc::new(products),
                stock: Arc::new(stock),
                transactions: Arc::new(InMemoryTransactionsRepository::new()),
                deliveries: Arc::new(InMemoryDeliveriesRepository::new()),
                payment_provider,
                settlement_currency: config.payment.currency.clone(),
            }
        }
        StorageBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .min_connections(config.database.min_connections)
                .acquire_timeout(config.database.acquire_timeout())
                .connect(&config.database.url)
                .await?;

            if config.database.run_migrations {
                sqlx::migrate!("./migrations").run(&pool).await?;
            }

            AppState {
                products: Arc::new(PostgresProductRepository::new(pool.clone())),
                stock: Arc::new(PostgresStockRepository::new(pool.clone())),
                transactions: Arc::new(PostgresTransactionsRepository::new(pool.clone())),
                deliveries: Arc::new(PostgresDeliveriesRepository::new(pool)),
                payment_provider,
                settlement_currency: config.payment.currency.clone(),
            }
        }
    };

    Ok(state)
}
