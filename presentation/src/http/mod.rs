//! HTTP API
//!
//! `POST /agreements/{agreementId}/ask` answers a question about one of the
//! caller's agreements; `GET /health` reports liveness.

mod auth;
mod error;
mod routes;
mod server;

pub use auth::{AuthError, Claims, Identity, JwtAuth};
pub use error::ApiError;
pub use routes::{AppState, AskRequest, AskResponse, build_router};
pub use server::serve;
