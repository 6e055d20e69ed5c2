//! Context assembly configuration from TOML (`[context]` section)

use covenant_domain::{ConfigIssue, ConfigIssueCode, ContextBudget};
use serde::{Deserialize, Serialize};

/// Context assembly configuration from TOML.
///
/// Controls how much agreement text is sent to the backend.
///
/// # Example
///
/// ```toml
/// [context]
/// max_context_chars = 30000
/// segment_size = 4000
/// overlap_size = 400
/// top_k = 6
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContextConfig {
    /// Documents up to this many chars are sent whole.
    pub max_context_chars: usize,
    /// Segment length for long documents.
    pub segment_size: usize,
    /// Chars shared by consecutive segments.
    pub overlap_size: usize,
    /// Number of best-scoring segments kept.
    pub top_k: usize,
}

impl Default for FileContextConfig {
    fn default() -> Self {
        let budget = ContextBudget::default();
        Self {
            max_context_chars: budget.max_context_chars(),
            segment_size: budget.segment_size(),
            overlap_size: budget.overlap_size(),
            top_k: budget.top_k(),
        }
    }
}

impl FileContextConfig {
    /// Convert to domain `ContextBudget`, returning validation issues.
    ///
    /// If the values violate constraints, falls back to `ContextBudget::default()`
    /// and returns warnings describing the issues.
    pub fn to_context_budget(&self) -> (ContextBudget, Vec<ConfigIssue>) {
        match ContextBudget::try_new(
            self.max_context_chars,
            self.segment_size,
            self.overlap_size,
            self.top_k,
        ) {
            Ok(budget) => (budget, vec![]),
            Err(errors) => {
                let issues = errors
                    .into_iter()
                    .map(|msg| {
                        ConfigIssue::warning(
                            ConfigIssueCode::InvalidConstraint {
                                field: "context".to_string(),
                            },
                            msg,
                        )
                    })
                    .collect();
                (ContextBudget::default(), issues)
            }
        }
    }
}
