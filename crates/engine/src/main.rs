//! Roster Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_engine::api;
use roster_engine::infrastructure::config::{
    build_cors_layer, load_dotenv_from_repo_root, ServerConfig,
};
use roster_engine::infrastructure::memory::InMemoryPlayerRepo;
use roster_engine::infrastructure::ports::PlayerRepo;
use roster_engine::infrastructure::sqlite::SqlitePlayerRepo;
use roster_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be started from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Roster Engine");

    let config = ServerConfig::from_env();

    let player_repo: Arc<dyn PlayerRepo> = match &config.player_db {
        Some(path) => {
            tracing::info!(path = %path, "Using SQLite player store");
            Arc::new(SqlitePlayerRepo::new(path).await?)
        }
        None => {
            tracing::info!("PLAYER_DB not set, keeping players in memory");
            Arc::new(InMemoryPlayerRepo::new())
        }
    };

    let app = Arc::new(App::new(player_repo));

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(&config) {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = config.bind_address().parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
