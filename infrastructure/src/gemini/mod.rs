//! Gemini `generateContent` adapter
//!
//! Implements the [`LlmGateway`](covenant_application::LlmGateway) port over
//! the Generative Language REST API. One call is one HTTP request; timeouts
//! and retries are applied by the caller.

pub mod error;
pub mod gateway;
pub mod types;

pub use error::GeminiError;
pub use gateway::{GeminiConfig, GeminiGateway};
