//! Cricket Game Service binary.

use cricket_core::RandomOpponent;
use cricket_server::{create_router, AppState, ServerConfig};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    let opponent = match config.opponent_seed {
        Some(seed) => {
            tracing::info!("Opponent seeded with {}", seed);
            RandomOpponent::seeded(seed)
        }
        None => RandomOpponent::new(),
    };
    let state = AppState::new(opponent, config.reveal_delay_ms);

    if !config.static_dir.is_dir() {
        tracing::warn!(
            "Static directory {} not found, UI will not be served",
            config.static_dir.display()
        );
    }
    let app = create_router(state, &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Game service listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
