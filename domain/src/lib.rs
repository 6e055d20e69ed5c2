//! Domain layer for covenant
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Grounded answers
//!
//! A question about an [`Agreement`] must be answered from the agreement's
//! own text. The domain provides the deterministic parts of that pipeline:
//!
//! - [`ContextAssembler`]: bounds the text sent to the backend
//! - [`PromptTemplate`]: renders the exact prompt, including the
//!   [`REFUSAL_SENTENCE`] the backend must use when the text is silent
//!
//! ## Conversations
//!
//! [`ConversationSession`] sequences user and assistant messages and keeps
//! at most one answer request in flight per conversation.

pub mod agreement;
pub mod context;
pub mod conversation;
pub mod core;
pub mod prompt;

// Re-export commonly used types
pub use agreement::{
    entities::Agreement,
    value_objects::{AgreementId, OwnerId},
};
pub use context::{AssembledContext, AssemblyStrategy, ContextAssembler, ContextBudget};
pub use conversation::{
    ConversationMessage, ConversationSession, FailureKind, PendingRequest, RequestToken,
    Resolution, Sender, SessionState,
};
pub use core::{
    error::DomainError,
    model::ModelId,
    question::Question,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use prompt::{PromptTemplate, REFUSAL_SENTENCE};
