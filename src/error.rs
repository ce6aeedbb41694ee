//! Error kinds surfaced at the HTTP boundary.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Invalid team '{0}', expected A or B")]
    InvalidTeam(String),

    #[error("Answer index {index} out of range (question has {len} answers)")]
    InvalidAnswerIndex { index: usize, len: usize },

    #[error("Import rejected: {0}")]
    InvalidImport(String),
}

impl GameError {
    pub fn status(&self) -> StatusCode {
        match self {
            GameError::MalformedRequest(_)
            | GameError::InvalidTeam(_)
            | GameError::InvalidAnswerIndex { .. }
            | GameError::InvalidImport(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!("Rejected request ({}): {}", status, self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<JsonRejection> for GameError {
    fn from(rejection: JsonRejection) -> Self {
        GameError::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for GameError {
    fn from(rejection: PathRejection) -> Self {
        GameError::MalformedRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for GameError {
    fn from(rejection: QueryRejection) -> Self {
        GameError::MalformedRequest(rejection.body_text())
    }
}
