use anyhow::{Context, Result};
use school_site::config::Config;
use school_site::content::ContentStore;
use school_site::forms::LoggingGateway;
use school_site::server::{self, AppState};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("school_site=info".parse()?),
        )
        .init();

    info!("Starting school site");

    let config = Config::from_env()?;
    let store = ContentStore::load_or_bundled(config.content_path.as_deref())?;
    info!(
        "Loaded content for {} teachers, default language '{}'",
        store.teachers().len(),
        config.default_language
    );

    let app = server::router(AppState {
        store: Arc::new(store),
        gateway: Arc::new(LoggingGateway::new()),
        default_language: config.default_language,
    });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
