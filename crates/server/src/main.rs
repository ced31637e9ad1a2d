// crates/server/src/main.rs
//! Visigen server binary.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use visigen_server::{create_app, init_metrics, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,visigen_server=info,visigen_core=info".into()),
        )
        .init();

    init_metrics();

    let config = ServerConfig::from_env();
    let addr = config.addr();
    tracing::info!(
        max_content_chars = config.analyzer.max_content_chars,
        cache = config.cache_enabled,
        provider = ?config.provider,
        "Loaded configuration"
    );

    let state = AppState::new(config).context("failed to build analyzer")?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("visigen v{} listening on http://{addr}", env!("CARGO_PKG_VERSION"));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
