//! Error types for the Gemini adapter

use thiserror::Error;

/// Errors raised while building a [`GeminiGateway`](super::GeminiGateway)
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("No API key configured (set COVENANT_BACKEND__API_KEY)")]
    MissingApiKey,

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
