//! Conversation entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A message in a conversation (Entity)
///
/// `sequence` is assigned by the session and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub sender: Sender,
    pub text: String,
    pub sequence: u64,
    pub timestamp: DateTime<Utc>,
}

impl ConversationMessage {
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn is_assistant(&self) -> bool {
        self.sender == Sender::Assistant
    }
}

/// Identifies one answer request of a session.
///
/// Tokens increase monotonically per session; a result carrying anything
/// but the session's current token is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn initial() -> Self {
        Self(0)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Why an answer request failed, as far as the user needs to know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    /// The backend could not produce an answer; retrying may help.
    Unavailable,
    /// The agreement does not exist or belongs to someone else.
    NotFound,
    /// Anything else.
    Internal,
}

impl FailureKind {
    /// Assistant message shown in place of an answer
    pub fn message(&self) -> &'static str {
        match self {
            FailureKind::Unavailable => {
                "The assistant is temporarily unavailable. Please retry your question."
            }
            FailureKind::NotFound => {
                "This agreement could not be found or you do not have access to it."
            }
            FailureKind::Internal => {
                "Something went wrong while answering. Please retry your question."
            }
        }
    }
}
