//! Conversation session state machine

use super::entities::{ConversationMessage, FailureKind, RequestToken, Sender};
use crate::agreement::value_objects::AgreementId;
use crate::core::question::Question;
use chrono::Utc;

/// Assistant message that opens every conversation
pub const GREETING: &str = "I have analyzed your agreement. Ask me anything about its contents.";

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingAnswer { token: RequestToken },
}

/// Work the driver must perform after a successful submit.
///
/// Only [`ConversationSession::submit`] creates these, so a session that is
/// already waiting cannot hand out a second one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub token: RequestToken,
    pub agreement_id: AgreementId,
    pub question: Question,
}

/// Outcome of delivering a result to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The result matched the current request and was appended.
    Applied,
    /// The result belonged to an abandoned request and was discarded.
    Stale,
}

/// One open conversation about one agreement.
///
/// The message log is append-only. Failures append an assistant message
/// instead of removing the optimistic user message.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    agreement_id: AgreementId,
    messages: Vec<ConversationMessage>,
    state: SessionState,
    current_token: RequestToken,
    next_sequence: u64,
}

impl ConversationSession {
    /// Open a session; the log starts with the assistant greeting.
    pub fn new(agreement_id: AgreementId) -> Self {
        let mut session = Self {
            agreement_id,
            messages: Vec::new(),
            state: SessionState::Idle,
            current_token: RequestToken::initial(),
            next_sequence: 0,
        };
        session.append(Sender::Assistant, GREETING);
        session
    }

    pub fn agreement_id(&self) -> &AgreementId {
        &self.agreement_id
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&ConversationMessage> {
        self.messages.last()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_awaiting_answer(&self) -> bool {
        matches!(self.state, SessionState::AwaitingAnswer { .. })
    }

    pub fn current_token(&self) -> RequestToken {
        self.current_token
    }

    /// Submit a question.
    ///
    /// Returns `None` without touching the session when the question is
    /// blank or an answer is already awaited.
    pub fn submit(&mut self, text: &str) -> Option<PendingRequest> {
        if self.is_awaiting_answer() {
            return None;
        }
        let question = Question::try_new(text)?;

        self.append(Sender::User, question.content());
        self.current_token = self.current_token.next();
        self.state = SessionState::AwaitingAnswer {
            token: self.current_token,
        };

        Some(PendingRequest {
            token: self.current_token,
            agreement_id: self.agreement_id.clone(),
            question,
        })
    }

    /// Deliver an answer for the request identified by `token`.
    pub fn resolve(&mut self, token: RequestToken, answer: impl Into<String>) -> Resolution {
        if !self.accepts(token) {
            return Resolution::Stale;
        }
        self.append(Sender::Assistant, answer);
        self.state = SessionState::Idle;
        Resolution::Applied
    }

    /// Deliver a failure for the request identified by `token`.
    pub fn fail(&mut self, token: RequestToken, kind: FailureKind) -> Resolution {
        if !self.accepts(token) {
            return Resolution::Stale;
        }
        self.append(Sender::Assistant, kind.message());
        self.state = SessionState::Idle;
        Resolution::Applied
    }

    /// Abandon any outstanding request; its result will be discarded.
    ///
    /// Messages are kept.
    pub fn reset(&mut self) {
        self.current_token = self.current_token.next();
        self.state = SessionState::Idle;
    }

    fn accepts(&self, token: RequestToken) -> bool {
        matches!(self.state, SessionState::AwaitingAnswer { token: current } if current == token)
    }

    fn append(&mut self, sender: Sender, text: impl Into<String>) {
        let message = ConversationMessage {
            sender,
            text: text.into(),
            sequence: self.next_sequence,
            timestamp: Utc::now(),
        };
        self.next_sequence += 1;
        self.messages.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ConversationSession {
        ConversationSession::new(AgreementId::new("agr-1").unwrap())
    }

    #[test]
    fn test_new_session_has_greeting() {
        let session = session();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::Assistant);
        assert_eq!(session.messages()[0].text, GREETING);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_blank_submit_changes_nothing() {
        let mut session = session();
        let token = session.current_token();
        assert!(session.submit("").is_none());
        assert!(session.submit("   \t\n").is_none());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.current_token(), token);
    }

    #[test]
    fn test_submit_appends_user_message_and_waits() {
        let mut session = session();
        let pending = session.submit("  When is rent due? ").unwrap();

        assert_eq!(pending.question.content(), "When is rent due?");
        assert_eq!(pending.agreement_id.as_str(), "agr-1");
        assert_eq!(
            session.state(),
            SessionState::AwaitingAnswer {
                token: pending.token
            }
        );
        let last = session.last_message().unwrap();
        assert!(last.is_user());
        assert_eq!(last.text, "When is rent due?");
    }

    #[test]
    fn test_submit_while_waiting_is_noop() {
        let mut session = session();
        let first = session.submit("When is rent due?").unwrap();
        let before = session.messages().to_vec();

        assert!(session.submit("What is the notice period?").is_none());
        assert_eq!(session.messages(), before.as_slice());
        assert_eq!(session.current_token(), first.token);
    }

    #[test]
    fn test_resolve_appends_answer() {
        let mut session = session();
        let pending = session.submit("When is rent due?").unwrap();

        let resolution = session.resolve(pending.token, "On the 1st of each month.");
        assert_eq!(resolution, Resolution::Applied);
        assert_eq!(session.state(), SessionState::Idle);
        let last = session.last_message().unwrap();
        assert!(last.is_assistant());
        assert_eq!(last.text, "On the 1st of each month.");
    }

    #[test]
    fn test_fail_appends_failure_message() {
        let mut session = session();
        let pending = session.submit("When is rent due?").unwrap();

        let resolution = session.fail(pending.token, FailureKind::Unavailable);
        assert_eq!(resolution, Resolution::Applied);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(
            session.last_message().unwrap().text,
            FailureKind::Unavailable.message()
        );
        // user message is kept
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn test_stale_result_after_reset_is_discarded() {
        let mut session = session();
        let pending = session.submit("When is rent due?").unwrap();
        session.reset();
        let len = session.messages().len();

        assert_eq!(session.resolve(pending.token, "late"), Resolution::Stale);
        assert_eq!(
            session.fail(pending.token, FailureKind::Internal),
            Resolution::Stale
        );
        assert_eq!(session.messages().len(), len);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_old_token_cannot_resolve_new_request() {
        let mut session = session();
        let first = session.submit("first?").unwrap();
        session.reset();
        let second = session.submit("second?").unwrap();
        assert_ne!(first.token, second.token);

        assert_eq!(session.resolve(first.token, "old"), Resolution::Stale);
        assert!(session.is_awaiting_answer());
        assert_eq!(session.resolve(second.token, "new"), Resolution::Applied);
        assert_eq!(session.last_message().unwrap().text, "new");
    }

    #[test]
    fn test_resolve_twice_is_stale() {
        let mut session = session();
        let pending = session.submit("q?").unwrap();
        assert_eq!(session.resolve(pending.token, "a"), Resolution::Applied);
        assert_eq!(session.resolve(pending.token, "a again"), Resolution::Stale);
    }

    #[test]
    fn test_sequences_strictly_increase() {
        let mut session = session();
        for i in 0..3 {
            let pending = session.submit(&format!("question {i}")).unwrap();
            session.resolve(pending.token, format!("answer {i}"));
        }
        let pending = session.submit("abandoned").unwrap();
        session.reset();
        session.fail(pending.token, FailureKind::Unavailable);

        let sequences: Vec<u64> = session.messages().iter().map(|m| m.sequence).collect();
        assert_eq!(sequences, (0..sequences.len() as u64).collect::<Vec<_>>());
        assert!(sequences.windows(2).all(|w| w[0] < w[1]));
    }
}
