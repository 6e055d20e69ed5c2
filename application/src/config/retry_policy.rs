//! Retry decisions for backend calls.
//!
//! The decision is a pure function of the attempt index and the error, kept
//! apart from the I/O loop in
//! [`AnswerService`](crate::use_cases::answer_question::AnswerService).

use super::answer_params::AnswerParams;
use crate::ports::llm_gateway::GatewayError;
use std::time::Duration;

/// What to do after a failed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    Retry(Duration),
    GiveUp,
}

/// Exponential backoff over a bounded number of attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff_base: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff_base: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff_base,
        }
    }

    pub fn from_params(params: &AnswerParams) -> Self {
        Self::new(params.max_retries, params.backoff_base())
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// `base * 2^attempt`, saturating
    pub fn backoff_for(base: Duration, attempt: u32) -> Duration {
        base.saturating_mul(1u32 << attempt.min(31))
    }

    /// Decide after attempt `attempt` (zero-based) failed with `error`.
    pub fn decide(&self, attempt: u32, error: &GatewayError) -> RetryDecision {
        if !error.is_transient() || attempt.saturating_add(1) >= self.max_attempts {
            return RetryDecision::GiveUp;
        }
        RetryDecision::Retry(Self::backoff_for(self.backoff_base, attempt))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_params(&AnswerParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::new(max_attempts, Duration::from_millis(100))
    }

    #[test]
    fn test_backoff_doubles() {
        let policy = policy(5);
        let delays: Vec<RetryDecision> = (0..4)
            .map(|attempt| policy.decide(attempt, &GatewayError::Timeout))
            .collect();
        assert_eq!(
            delays,
            vec![
                RetryDecision::Retry(Duration::from_millis(100)),
                RetryDecision::Retry(Duration::from_millis(200)),
                RetryDecision::Retry(Duration::from_millis(400)),
                RetryDecision::Retry(Duration::from_millis(800)),
            ]
        );
    }

    #[test]
    fn test_gives_up_after_last_attempt() {
        let policy = policy(3);
        assert!(matches!(
            policy.decide(1, &GatewayError::Timeout),
            RetryDecision::Retry(_)
        ));
        assert_eq!(policy.decide(2, &GatewayError::Timeout), RetryDecision::GiveUp);
    }

    #[test]
    fn test_non_transient_gives_up_immediately() {
        let policy = policy(3);
        let error = GatewayError::Backend {
            status: 401,
            message: "unauthorized".to_string(),
            retryable: false,
        };
        assert_eq!(policy.decide(0, &error), RetryDecision::GiveUp);
        assert_eq!(
            policy.decide(0, &GatewayError::InvalidResponse("x".to_string())),
            RetryDecision::GiveUp
        );
    }

    #[test]
    fn test_single_attempt_never_retries() {
        let policy = policy(1);
        assert_eq!(policy.decide(0, &GatewayError::Timeout), RetryDecision::GiveUp);
    }

    #[test]
    fn test_zero_attempts_is_treated_as_one() {
        assert_eq!(policy(0).max_attempts(), 1);
    }

    #[test]
    fn test_backoff_saturates() {
        let delay = RetryPolicy::backoff_for(Duration::from_secs(u64::MAX / 2), 40);
        assert_eq!(delay, Duration::MAX);
    }
}
