//! Backend call control from TOML (`[answer]` section)

use covenant_application::AnswerParams;
use covenant_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Backend call control from TOML.
///
/// # Example
///
/// ```toml
/// [answer]
/// timeout_ms = 30000
/// max_retries = 3
/// backoff_base_ms = 500
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnswerConfig {
    pub timeout_ms: u64,
    /// Total attempts, the first one included.
    pub max_retries: u32,
    pub backoff_base_ms: u64,
}

impl Default for FileAnswerConfig {
    fn default() -> Self {
        let params = AnswerParams::default();
        Self {
            timeout_ms: params.timeout_ms,
            max_retries: params.max_retries,
            backoff_base_ms: params.backoff_base_ms,
        }
    }
}

impl FileAnswerConfig {
    /// Convert to `AnswerParams`; invalid values fall back to defaults with
    /// a warning each.
    pub fn to_answer_params(&self) -> (AnswerParams, Vec<ConfigIssue>) {
        let defaults = AnswerParams::default();
        let mut params = AnswerParams::default().with_backoff_base_ms(self.backoff_base_ms);
        let mut issues = Vec::new();

        if self.timeout_ms == 0 {
            issues.push(invalid("answer.timeout_ms", defaults.timeout_ms));
        } else {
            params = params.with_timeout_ms(self.timeout_ms);
        }
        if self.max_retries == 0 {
            issues.push(invalid("answer.max_retries", defaults.max_retries as u64));
        } else {
            params = params.with_max_retries(self.max_retries);
        }

        (params, issues)
    }
}

fn invalid(field: &str, fallback: u64) -> ConfigIssue {
    ConfigIssue::warning(
        ConfigIssueCode::InvalidConstraint {
            field: field.to_string(),
        },
        format!("{field} must be >= 1, falling back to {fallback}"),
    )
}
