//! LLM Gateway port
//!
//! Defines the interface for communicating with the text generation backend.

use async_trait::async_trait;
use covenant_domain::ModelId;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Timeout")]
    Timeout,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Backend returned status {status}: {message}")]
    Backend {
        status: u16,
        message: String,
        retryable: bool,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// Whether another attempt might succeed
    pub fn is_transient(&self) -> bool {
        match self {
            GatewayError::Timeout | GatewayError::Transport(_) => true,
            GatewayError::Backend { retryable, .. } => *retryable,
            GatewayError::InvalidResponse(_) => false,
        }
    }
}

/// One generated completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub finish_reason: Option<String>,
}

impl Candidate {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            finish_reason: None,
        }
    }
}

/// Gateway for text generation
///
/// This port defines how the application layer reaches the generation backend.
/// Implementations (adapters) live in the infrastructure layer. One call is
/// one attempt; retries are the caller's business.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Generate candidates for a prompt. An empty list is a valid response.
    async fn generate_text(
        &self,
        model: &ModelId,
        prompt: &str,
    ) -> Result<Vec<Candidate>, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(GatewayError::Timeout.is_transient());
        assert!(GatewayError::Transport("reset".to_string()).is_transient());
        assert!(
            GatewayError::Backend {
                status: 503,
                message: "overloaded".to_string(),
                retryable: true
            }
            .is_transient()
        );
        assert!(
            !GatewayError::Backend {
                status: 400,
                message: "bad request".to_string(),
                retryable: false
            }
            .is_transient()
        );
        assert!(!GatewayError::InvalidResponse("garbage".to_string()).is_transient());
    }
}
