//! Answer parameters: backend call control.
//!
//! [`AnswerParams`] groups the static parameters that bound a single
//! [`AnswerService`](crate::use_cases::answer_question::AnswerService) call.

use super::retry_policy::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Backend call control parameters.
///
/// `max_retries` bounds the total number of attempts, including the first:
/// with `max_retries = 3` the backend is called at most three times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerParams {
    /// Upper bound for one attempt, in milliseconds.
    pub timeout_ms: u64,
    /// Maximum number of attempts.
    pub max_retries: u32,
    /// Base of the exponential backoff, in milliseconds.
    pub backoff_base_ms: u64,
}

impl Default for AnswerParams {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            max_retries: 3,
            backoff_base_ms: 500,
        }
    }
}

impl AnswerParams {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn backoff_base(&self) -> Duration {
        Duration::from_millis(self.backoff_base_ms)
    }

    /// Worst-case time before a caller is guaranteed an outcome.
    pub fn worst_case(&self) -> Duration {
        let attempts = self.max_retries.max(1);
        let mut total = self.timeout().saturating_mul(attempts);
        for attempt in 0..attempts.saturating_sub(1) {
            total = total.saturating_add(RetryPolicy::backoff_for(self.backoff_base(), attempt));
        }
        total
    }

    /// Validate, returning a list of issues.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.timeout_ms == 0 {
            issues.push("answer: timeout_ms must be >= 1".to_string());
        }
        if self.max_retries == 0 {
            issues.push("answer: max_retries must be >= 1".to_string());
        }
        issues
    }

    // ==================== Builder Methods ====================

    pub fn with_timeout_ms(mut self, ms: u64) -> Self {
        self.timeout_ms = ms;
        self
    }

    pub fn with_max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }

    pub fn with_backoff_base_ms(mut self, ms: u64) -> Self {
        self.backoff_base_ms = ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = AnswerParams::default();
        assert_eq!(params.timeout_ms, 30_000);
        assert_eq!(params.max_retries, 3);
        assert_eq!(params.backoff_base_ms, 500);
        assert!(params.validate().is_empty());
    }

    #[test]
    fn test_builder() {
        let params = AnswerParams::default()
            .with_timeout_ms(1_000)
            .with_max_retries(5)
            .with_backoff_base_ms(10);

        assert_eq!(params.timeout(), Duration::from_secs(1));
        assert_eq!(params.max_retries, 5);
        assert_eq!(params.backoff_base(), Duration::from_millis(10));
    }

    #[test]
    fn test_worst_case() {
        let params = AnswerParams::default()
            .with_timeout_ms(1_000)
            .with_max_retries(3)
            .with_backoff_base_ms(100);
        // 3 attempts + backoff 100 + 200
        assert_eq!(params.worst_case(), Duration::from_millis(3_300));
    }

    #[test]
    fn test_validate_zero_values() {
        let params = AnswerParams::default()
            .with_timeout_ms(0)
            .with_max_retries(0);
        assert_eq!(params.validate().len(), 2);
    }
}
