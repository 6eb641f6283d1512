//! Route definitions for the Mini Inventory server

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Product registry
        .nest("/products", product_routes())
        // Transaction ledger
        .nest("/transactions", transaction_routes())
        // Financial summary
        .route("/summary", get(handlers::get_financial_summary))
}

/// Product registry routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/low-stock", get(handlers::list_low_stock_products))
        .route(
            "/:product_id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
}

/// Transaction ledger routes
fn transaction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_transactions).post(handlers::record_transaction),
        )
        .route(
            "/:transaction_id",
            get(handlers::get_transaction).delete(handlers::delete_transaction),
        )
}
