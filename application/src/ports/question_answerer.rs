//! Question answerer port
//!
//! The full ask pipeline as seen by its callers (HTTP handlers, the chat
//! controller). [`AskAgreementUseCase`](crate::use_cases::ask_agreement::AskAgreementUseCase)
//! is the production implementation.

use crate::use_cases::answer_question::AnswerError;
use crate::use_cases::authorize::AuthorizationError;
use async_trait::async_trait;
use covenant_domain::{AgreementId, FailureKind, OwnerId};
use thiserror::Error;

/// Errors surfaced by the ask pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AskError {
    /// The question is empty after trimming
    #[error("A question is required.")]
    Validation,

    /// Agreement absent or owned by someone else; the two are indistinguishable
    #[error("Agreement not found or not authorized")]
    NotFound,

    #[error("Backend error: {0}")]
    Backend(#[from] AnswerError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl AskError {
    /// How a conversation should present this error
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            AskError::NotFound => FailureKind::NotFound,
            AskError::Backend(_) => FailureKind::Unavailable,
            AskError::Validation | AskError::Unexpected(_) => FailureKind::Internal,
        }
    }
}

impl From<AuthorizationError> for AskError {
    fn from(error: AuthorizationError) -> Self {
        match error {
            AuthorizationError::NotFound => AskError::NotFound,
            AuthorizationError::Repository(e) => AskError::Unexpected(e.to_string()),
        }
    }
}

/// Answers questions about a caller's agreement
#[async_trait]
pub trait QuestionAnswerer: Send + Sync {
    async fn ask(
        &self,
        agreement_id: &AgreementId,
        identity: &OwnerId,
        question: &str,
    ) -> Result<String, AskError>;
}
