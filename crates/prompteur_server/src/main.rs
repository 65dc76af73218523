//! Prompteur server binary.
//!
//! Wires the PostgreSQL slide store, the Gemini narration backend, the
//! per-user quota, and the HTTP router, then serves.

use prompteur_database::{PostgresSlideStore, establish_connection, run_migrations};
use prompteur_interface::SlideStore;
use prompteur_models::GeminiClient;
use prompteur_narration::{
    DeckOrchestrator, ModelCascade, NarrationGenerator, StaticFallbackScripts,
};
use prompteur_rate_limit::{PrompteurConfig, UserRateLimiter};
use prompteur_server::{AppState, router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = PrompteurConfig::load()?;

    let mut conn = establish_connection()?;
    run_migrations(&mut conn)?;
    let store: Arc<dyn SlideStore> = Arc::new(PostgresSlideStore::new(conn));

    let driver = GeminiClient::new()?;
    let generator = NarrationGenerator::new(driver)
        .with_cascade(ModelCascade::new(config.generation.models.clone()))
        .with_sampling(config.generation.temperature, config.generation.max_tokens);
    let orchestrator = Arc::new(DeckOrchestrator::new(Arc::clone(&store), generator));

    let limiter = Arc::new(UserRateLimiter::new(&config.rate_limit)?);
    let fallback = Arc::new(StaticFallbackScripts::new(
        config
            .fallback
            .scripts
            .iter()
            .map(|entry| (entry.position, entry.text.clone())),
    ));

    let state = AppState {
        store,
        orchestrator,
        limiter,
        fallback,
    };

    let addr: SocketAddr = std::env::var("PROMPTEUR_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Prompteur server listening");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
