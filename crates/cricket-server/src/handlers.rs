//! HTTP API handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cricket_core::{round_callout, MatchError, MatchSnapshot, Move, RoundRecord, MATCH_LENGTH};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::state::AppState;

/// Application error type
pub enum AppError {
    Match(MatchError),
    /// Body was not a JSON object we could read
    BadBody(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Match(e) => {
                let status = match &e {
                    MatchError::InvalidMove(_) | MatchError::InvalidName => {
                        StatusCode::BAD_REQUEST
                    }
                    MatchError::IllegalState { .. } => StatusCode::CONFLICT,
                };
                (status, e.to_string())
            }
            AppError::BadBody(message) => (StatusCode::BAD_REQUEST, message),
        };
        warn!("Rejected request: {}", message);
        (status, Json(serde_json::json!({"error": message}))).into_response()
    }
}

impl From<MatchError> for AppError {
    fn from(e: MatchError) -> Self {
        AppError::Match(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadBody(rejection.body_text())
    }
}

// ============ Request/Response types ============

// Fields stay loosely typed so a missing or mistyped value reaches the
// engine's own validation instead of failing in the extractor.

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub name: Value,
}

impl LoginRequest {
    fn name(&self) -> Result<&str, MatchError> {
        self.name.as_str().ok_or(MatchError::InvalidName)
    }
}

#[derive(Deserialize)]
pub struct PlayRequest {
    #[serde(rename = "move", default)]
    pub human_move: Value,
}

impl PlayRequest {
    fn human_move(&self) -> Result<Move, MatchError> {
        match &self.human_move {
            Value::String(s) => s.parse(),
            Value::Null => Err(MatchError::InvalidMove(String::new())),
            other => Err(MatchError::InvalidMove(other.to_string())),
        }
    }
}

#[derive(Serialize)]
pub struct PlayResponse {
    pub round: RoundRecord,
    pub callout: &'static str,
    #[serde(rename = "match")]
    pub snapshot: MatchSnapshot,
}

#[derive(Serialize)]
pub struct ConfigResponse {
    pub match_length: usize,
    pub reveal_delay_ms: u64,
}

// ============ Handlers ============

pub async fn health() -> Json<&'static str> {
    Json("ok")
}

pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        match_length: MATCH_LENGTH,
        reveal_delay_ms: state.reveal_delay_ms(),
    })
}

pub async fn get_match(State(state): State<AppState>) -> Json<MatchSnapshot> {
    Json(state.snapshot())
}

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<MatchSnapshot>, AppError> {
    let Json(req) = body?;
    let snapshot = state.login(req.name()?)?;
    info!("Match {} started", snapshot.match_id);
    Ok(Json(snapshot))
}

pub async fn play(
    State(state): State<AppState>,
    body: Result<Json<PlayRequest>, JsonRejection>,
) -> Result<Json<PlayResponse>, AppError> {
    let Json(req) = body?;
    let human_move = req.human_move()?;
    let (round, snapshot) = state.play(human_move)?;

    info!(
        "Round {}: {} vs {} -> {}",
        round.round, round.human_move, round.opponent_move, round.outcome
    );

    Ok(Json(PlayResponse {
        round,
        callout: round_callout(&round),
        snapshot,
    }))
}

pub async fn restart(State(state): State<AppState>) -> Result<Json<MatchSnapshot>, AppError> {
    Ok(Json(state.restart()?))
}

pub async fn quit(State(state): State<AppState>) -> Json<MatchSnapshot> {
    Json(state.quit())
}
