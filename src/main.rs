//! Hoop Story Back binary entrypoint wiring the player store, REST API and static client.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use hoop_story_back::{
    config::AppConfig,
    dao::player_store::PlayerStore,
    routes,
    services::import_service,
    state::{AppState, SharedState},
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    let store = connect_store(&config).await?;

    if config.seed_sample_player {
        match import_service::seed_sample_if_empty(store.as_ref()).await {
            Ok(true) => info!("database was empty; sample player added"),
            Ok(false) => {}
            Err(err) => warn!(error = %err, "failed to seed sample player"),
        }
    }

    let addr = config.bind_addr();
    let app = build_router(AppState::new(store, config));
    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Open the SQLite database named by the config and run its migrations.
#[cfg(feature = "sqlite-store")]
async fn connect_store(config: &AppConfig) -> anyhow::Result<Arc<dyn PlayerStore>> {
    use hoop_story_back::dao::player_store::sqlite::{SqliteConfig, SqlitePlayerStore};

    let store = SqlitePlayerStore::connect(SqliteConfig::new(config.database_url.clone()))
        .await
        .with_context(|| format!("opening database {}", config.database_url))?;
    Ok(Arc::new(store))
}

/// Without SQLite support players only live as long as the process.
#[cfg(not(feature = "sqlite-store"))]
async fn connect_store(config: &AppConfig) -> anyhow::Result<Arc<dyn PlayerStore>> {
    use hoop_story_back::dao::player_store::memory::MemoryPlayerStore;

    warn!(database = %config.database_url, "built without sqlite-store; using in-memory players");
    Ok(Arc::new(MemoryPlayerStore::new()))
}

/// Build the top-level router and attach cross-cutting middleware layers.
fn build_router(state: SharedState) -> Router<()> {
    routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = term.recv() => {},
                }
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
