//! Simple Bank API - Main Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Ensure the accounts schema exists
//! 4. Build HTTP router
//! 5. Start server on configured address

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use simple_bank_server::{app, config::Config, db, services::account_store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database_url)
        .await
        .with_context(|| format!("cannot open database {}", config.database_url))?;
    tracing::info!("Database pool created");

    account_store::initialize(&pool)
        .await
        .context("schema initialization failed")?;

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(pool)).await?;

    Ok(())
}
