//! HTTP API endpoints for the game board.
//!
//! Every handler maps onto one `GameStore` operation and answers with the
//! full resulting `GameState`, so admin and presenter pages can render
//! straight from the response.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::error::GameResult;
use crate::state::export::GameStateExport;
use crate::state::GameStore;
use crate::types::{GameState, QuestionInput, Team};
use crate::ws;

/// Shared state handed to every handler
pub struct AppState {
    pub store: GameStore,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(store: GameStore, config: ServerConfig) -> Self {
        Self { store, config }
    }
}

/// API and WebSocket routes without static files or middleware.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/game", get(get_game))
        .route("/api/game/question", post(set_question))
        .route("/api/game/reveal", post(reveal_next))
        .route("/api/game/reveal/{index}", post(reveal_at))
        .route("/api/game/strike", post(add_strike))
        .route("/api/game/points/{team}", post(add_points))
        .route("/api/game/reset", post(reset_game))
        .route("/api/game/export", get(export_state))
        .route("/api/game/import", post(import_state))
        .route("/ws", get(ws::ws_handler))
        .with_state(state)
}

/// Full application: API routes, static pages as fallback, CORS and tracing.
pub fn app(state: Arc<AppState>) -> Router {
    let static_dir = state.config.static_dir.clone();
    router(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// GET /api/game
pub async fn get_game(State(state): State<Arc<AppState>>) -> Json<GameState> {
    tracing::debug!("Serving game state");
    Json(state.store.get().await)
}

/// POST /api/game/question
///
/// Body: `{ "text": string, "answers": [{ "text": string, "score": number }] }`.
/// Scores may also be numeric strings; anything else counts as 0.
pub async fn set_question(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuestionInput>, JsonRejection>,
) -> GameResult<Json<GameState>> {
    let Json(input) = payload?;
    Ok(Json(
        state.store.set_question(input.text, input.answers).await,
    ))
}

/// POST /api/game/reveal
///
/// Reveals the lowest-index hidden answer. With nothing left to reveal the
/// unchanged state is returned rather than an error.
pub async fn reveal_next(State(state): State<Arc<AppState>>) -> Json<GameState> {
    let (_, game) = state.store.reveal_next().await;
    Json(game)
}

/// POST /api/game/reveal/{index}
pub async fn reveal_at(
    State(state): State<Arc<AppState>>,
    index: Result<Path<usize>, PathRejection>,
) -> GameResult<Json<GameState>> {
    let Path(index) = index?;
    let (_, game) = state.store.reveal_at(index).await?;
    Ok(Json(game))
}

/// POST /api/game/strike
pub async fn add_strike(State(state): State<Arc<AppState>>) -> Json<GameState> {
    Json(state.store.add_strike().await)
}

#[derive(Debug, Deserialize)]
pub struct PointsQuery {
    pub amount: Option<i64>,
}

/// POST /api/game/points/{team}
///
/// `team` must be `A` or `B`. `?amount=N` overrides the configured award.
pub async fn add_points(
    State(state): State<Arc<AppState>>,
    team: Result<Path<String>, PathRejection>,
    query: Result<Query<PointsQuery>, QueryRejection>,
) -> GameResult<Json<GameState>> {
    let Path(team) = team?;
    let team: Team = team.parse()?;
    let Query(query) = query?;
    let amount = query.amount.unwrap_or(state.config.default_points);
    Ok(Json(state.store.add_points(team, amount).await))
}

/// POST /api/game/reset
pub async fn reset_game(State(state): State<Arc<AppState>>) -> Json<GameState> {
    Json(state.store.reset().await)
}

/// GET /api/game/export
pub async fn export_state(State(state): State<Arc<AppState>>) -> Json<GameStateExport> {
    Json(state.store.export_state().await)
}

/// POST /api/game/import
///
/// Replaces the whole board with a previously exported snapshot.
pub async fn import_state(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GameStateExport>, JsonRejection>,
) -> GameResult<Json<GameState>> {
    let Json(export) = payload?;
    Ok(Json(state.store.import_state(export).await?))
}
