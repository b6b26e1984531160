//! Books server: loads config from the environment (and `.env`), connects to
//! PostgreSQL, and serves the books API until Ctrl-C.
//!
//! Run from repo root: `cargo run -p books-server`

use books_api::{app, AppConfig, AppState, PgBookStore};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("books_api=info,books_server=info,tower_http=info")
            }),
        )
        .init();

    let config = AppConfig::from_env()?;
    let store = PgBookStore::connect(&config).await?;
    tracing::info!(table = %config.books_table, "connected to database");
    let pool = store.pool().clone();

    let router = app(AppState::new(store), config.max_body_bytes);
    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
