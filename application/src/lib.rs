//! Application layer for covenant
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AnswerParams, AskConfig, RetryDecision, RetryPolicy};
pub use ports::{
    agreement_repository::{AgreementRepository, RepositoryError},
    llm_gateway::{Candidate, GatewayError, LlmGateway},
    question_answerer::{AskError, QuestionAnswerer},
};
pub use use_cases::answer_question::{Answer, AnswerError, AnswerService};
pub use use_cases::ask_agreement::AskAgreementUseCase;
pub use use_cases::authorize::{AuthorizationError, AuthorizationGate};
pub use use_cases::conversation::ConversationController;
