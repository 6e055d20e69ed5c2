//! Conversations about a single agreement.
//!
//! [`ConversationSession`] is the client-side state machine that sequences
//! user and assistant messages and guarantees at most one outstanding
//! answer request per conversation.

pub mod entities;
pub mod session;

pub use entities::{ConversationMessage, FailureKind, RequestToken, Sender};
pub use session::{ConversationSession, PendingRequest, Resolution, SessionState};
