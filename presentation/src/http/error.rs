//! HTTP error responses
//!
//! Every error body is `{"msg": "..."}`. Backend and unexpected failures
//! share one generic body; details go to the log only.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use covenant_application::AskError;
use serde_json::json;
use tracing::error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    MissingToken,
    InvalidToken,
    QuestionRequired,
    NotFound,
    Server,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingToken | ApiError::InvalidToken => StatusCode::UNAUTHORIZED,
            ApiError::QuestionRequired => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Server => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::MissingToken => "No token, authorization denied",
            ApiError::InvalidToken => "Token is not valid",
            ApiError::QuestionRequired => "A question is required.",
            ApiError::NotFound => "Agreement not found or not authorized",
            ApiError::Server => "Server Error",
        }
    }
}

impl From<AskError> for ApiError {
    fn from(err: AskError) -> Self {
        match err {
            AskError::Validation => ApiError::QuestionRequired,
            AskError::NotFound => ApiError::NotFound,
            AskError::Backend(e) => {
                error!("Answer failed: {}", e);
                ApiError::Server
            }
            AskError::Unexpected(e) => {
                error!("Unexpected error while answering: {}", e);
                ApiError::Server
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "msg": self.message() }))).into_response()
    }
}
