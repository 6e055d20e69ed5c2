//! Answer service
//!
//! Sends a rendered prompt to the generation backend under a per-attempt
//! timeout, retrying transient failures with exponential backoff.

use crate::config::{AnswerParams, RetryDecision, RetryPolicy};
use crate::ports::llm_gateway::{Candidate, GatewayError, LlmGateway};
use covenant_domain::ModelId;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from [`AnswerService::answer`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    /// The backend replied but produced no usable text
    #[error("Backend returned an empty answer")]
    EmptyResponse,

    #[error("Backend unavailable after {attempts} attempt(s): {last_error}")]
    BackendUnavailable {
        attempts: u32,
        last_error: GatewayError,
    },
}

/// A successful answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    /// First candidate, trimmed
    pub text: String,
    /// Attempts used, including the successful one
    pub attempts: u32,
}

/// Bounded, retrying access to the backend
pub struct AnswerService {
    gateway: Arc<dyn LlmGateway>,
    policy: RetryPolicy,
    timeout: Duration,
}

impl AnswerService {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: &AnswerParams) -> Self {
        Self {
            gateway,
            policy: RetryPolicy::from_params(params),
            timeout: params.timeout(),
        }
    }

    /// Produce an answer for `prompt`.
    pub async fn answer(&self, model: &ModelId, prompt: &str) -> Result<Answer, AnswerError> {
        let mut attempt: u32 = 0;
        loop {
            let error = match self.attempt(model, prompt).await {
                Ok(candidates) => {
                    return match first_text(&candidates) {
                        Some(text) => {
                            debug!(attempts = attempt + 1, "Backend answered");
                            Ok(Answer {
                                text,
                                attempts: attempt + 1,
                            })
                        }
                        None => Err(AnswerError::EmptyResponse),
                    };
                }
                Err(error) => error,
            };

            match self.policy.decide(attempt, &error) {
                RetryDecision::Retry(delay) => {
                    warn!(
                        attempt = attempt + 1,
                        max_attempts = self.policy.max_attempts(),
                        delay_ms = delay.as_millis() as u64,
                        "Backend call failed, retrying: {}",
                        error
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                RetryDecision::GiveUp => {
                    warn!(attempts = attempt + 1, "Backend call failed: {}", error);
                    return Err(AnswerError::BackendUnavailable {
                        attempts: attempt + 1,
                        last_error: error,
                    });
                }
            }
        }
    }

    async fn attempt(&self, model: &ModelId, prompt: &str) -> Result<Vec<Candidate>, GatewayError> {
        match tokio::time::timeout(self.timeout, self.gateway.generate_text(model, prompt)).await {
            Ok(result) => result,
            Err(_) => Err(GatewayError::Timeout),
        }
    }
}

/// Text of the first candidate, unless it is blank
fn first_text(candidates: &[Candidate]) -> Option<String> {
    let text = candidates.first()?.text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
