//! Cricket Game Service
//!
//! HTTP service with Web UI that hosts a single bat / ball / wicket match
//! against a random computer opponent.

pub mod config;
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub use config::{ConfigError, ServerConfig};
pub use state::AppState;

use handlers::*;

pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/config", get(get_config))
        .route("/api/match", get(get_match))
        .route("/api/login", post(login))
        .route("/api/play", post(play))
        .route("/api/restart", post(restart))
        .route("/api/quit", post(quit))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
