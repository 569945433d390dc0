//! Simple bank ledger service.
//!
//! Accounts with a current balance, plus deposits, withdrawals and
//! transfers applied atomically against a SQLite store.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum
//! - **Database**: SQLite through sqlx
//! - **Format**: JSON requests/responses
//!
//! The router is built by [`app`] so the binary and the integration tests
//! serve exactly the same routes.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::db::DbPool;

/// Build the HTTP router over an initialized pool.
pub fn app(pool: DbPool) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        // Account routes
        .route("/accounts/", post(handlers::accounts::create_account))
        .route("/accounts", post(handlers::accounts::create_account))
        .route(
            "/accounts/{account_number}/balance",
            get(handlers::accounts::get_balance),
        )
        .route(
            "/accounts/{account_number}/deposit",
            post(handlers::accounts::deposit),
        )
        .route(
            "/accounts/{account_number}/withdraw",
            post(handlers::accounts::withdraw),
        )
        // Transfer routes
        .route("/transfer/", post(handlers::transfers::create_transfer))
        .route("/transfer", post(handlers::transfers::create_transfer))
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
