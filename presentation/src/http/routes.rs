//! Router and handlers

use super::auth::{Identity, JwtAuth};
use super::error::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use covenant_application::QuestionAnswerer;
use covenant_domain::AgreementId;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Shared state accessible from handlers
#[derive(Clone)]
pub struct AppState {
    pub answerer: Arc<dyn QuestionAnswerer>,
    pub auth: Arc<JwtAuth>,
}

impl AppState {
    pub fn new(answerer: Arc<dyn QuestionAnswerer>, auth: JwtAuth) -> Self {
        Self {
            answerer,
            auth: Arc::new(auth),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Build the API router.
pub fn build_router(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/agreements/{agreement_id}/ask", post(ask))
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// POST /agreements/{agreement_id}/ask
async fn ask(
    Identity(identity): Identity,
    State(state): State<AppState>,
    Path(agreement_id): Path<String>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let question = match body {
        Ok(Json(AskRequest {
            question: Some(question),
        })) => question,
        Ok(_) => return Err(ApiError::QuestionRequired),
        Err(rejection) => {
            debug!("Rejected request body: {}", rejection);
            return Err(ApiError::QuestionRequired);
        }
    };
    let agreement_id = AgreementId::new(agreement_id).map_err(|_| ApiError::NotFound)?;

    info!(agreement = %agreement_id, "Question received");
    let answer = state
        .answerer
        .ask(&agreement_id, &identity, &question)
        .await?;

    Ok(Json(AskResponse { answer }))
}
