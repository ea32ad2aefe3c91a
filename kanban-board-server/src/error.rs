//! HTTP error mapping
//!
//! Two tiers only: addressing failures become 404 with the descriptive
//! message from the engine, everything else becomes 500 with a fixed
//! per-route message. The cause of a 500 is logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kanban_board::KanbanError;
use serde_json::json;
use std::fmt::Display;
use thiserror::Error;

/// Error returned by request handlers
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A board, column, task or checklist item is absent
    #[error("{0}")]
    NotFound(String),

    /// Storage, encoding or payload failure
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// Classify an engine error, logging the cause of operational failures
    pub fn from_kanban(error: KanbanError, failure: &'static str) -> Self {
        if error.is_not_found() {
            Self::NotFound(error.to_string())
        } else {
            Self::internal(error, failure)
        }
    }

    /// Operational failure with a logged cause
    pub fn internal(cause: impl Display, failure: &'static str) -> Self {
        tracing::error!(error = %cause, "{}", failure);
        Self::Internal(failure)
    }

    /// Status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "message": self.to_string() }));
        (self.status(), body).into_response()
    }
}
