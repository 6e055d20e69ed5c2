//! Conversation controller
//!
//! Drives a [`ConversationSession`] against a [`QuestionAnswerer`]. Answer
//! requests run on spawned tasks and report back over a channel, so the
//! caller stays responsive and abandoned requests can be told apart from
//! current ones by their token.

use crate::ports::question_answerer::{AskError, QuestionAnswerer};
use covenant_domain::{
    AgreementId, ConversationMessage, ConversationSession, OwnerId, RequestToken, Resolution,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// Result of one spawned answer request
#[derive(Debug)]
struct ReplyOutcome {
    token: RequestToken,
    result: Result<String, AskError>,
}

/// One user's conversation about one agreement
pub struct ConversationController {
    session: ConversationSession,
    identity: OwnerId,
    answerer: Arc<dyn QuestionAnswerer>,
    tx: mpsc::UnboundedSender<ReplyOutcome>,
    rx: mpsc::UnboundedReceiver<ReplyOutcome>,
}

impl ConversationController {
    pub fn new(
        agreement_id: AgreementId,
        identity: OwnerId,
        answerer: Arc<dyn QuestionAnswerer>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            session: ConversationSession::new(agreement_id),
            identity,
            answerer,
            tx,
            rx,
        }
    }

    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        self.session.messages()
    }

    pub fn is_awaiting_answer(&self) -> bool {
        self.session.is_awaiting_answer()
    }

    /// Submit a question and start answering it in the background.
    ///
    /// Returns `false` when the question is blank or an answer is already
    /// awaited; nothing is sent in that case.
    pub fn submit(&mut self, text: &str) -> bool {
        let Some(pending) = self.session.submit(text) else {
            return false;
        };

        let answerer = Arc::clone(&self.answerer);
        let identity = self.identity.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = answerer
                .ask(&pending.agreement_id, &identity, pending.question.content())
                .await;
            // Receiver gone means the conversation was closed
            let _ = tx.send(ReplyOutcome {
                token: pending.token,
                result,
            });
        });
        true
    }

    /// Wait for the current request to finish and return the assistant
    /// message it produced.
    ///
    /// Stale results are discarded along the way. Returns `None` when no
    /// answer is awaited.
    pub async fn wait_for_reply(&mut self) -> Option<ConversationMessage> {
        while self.session.is_awaiting_answer() {
            let outcome = self.rx.recv().await?;
            if self.apply(outcome) == Resolution::Applied {
                return self.session.last_message().cloned();
            }
        }
        None
    }

    /// Apply every result that has already arrived, without waiting.
    ///
    /// Returns how many were applied.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.rx.try_recv() {
            if self.apply(outcome) == Resolution::Applied {
                applied += 1;
            }
        }
        applied
    }

    /// Abandon the outstanding request, if any. Messages are kept.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    fn apply(&mut self, outcome: ReplyOutcome) -> Resolution {
        let resolution = match outcome.result {
            Ok(answer) => self.session.resolve(outcome.token, answer),
            Err(error) => {
                debug!(token = %outcome.token, "Answer request failed: {}", error);
                self.session.fail(outcome.token, error.failure_kind())
            }
        };
        if resolution == Resolution::Stale {
            debug!(token = %outcome.token, "Discarding stale answer");
        }
        resolution
    }
}
