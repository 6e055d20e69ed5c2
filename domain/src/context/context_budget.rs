//! Context budget for controlling how much agreement text reaches the backend.
//!
//! [`ContextBudget`] bounds the assembled context so that long agreements are
//! reduced deterministically instead of being rejected or silently truncated
//! by the generation backend.

use serde::{Deserialize, Serialize};

/// Budget controlling context assembly.
///
/// Four knobs, all measured in characters:
/// - `max_context_chars`: hard cap on the assembled context
/// - `segment_size`: target length of one segment of a long document
/// - `overlap_size`: how much consecutive segments share
/// - `top_k`: how many segments are kept after scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextBudget {
    max_context_chars: usize,
    segment_size: usize,
    overlap_size: usize,
    top_k: usize,
}

impl ContextBudget {
    /// Create a budget, validating the constraints between the knobs.
    pub fn try_new(
        max_context_chars: usize,
        segment_size: usize,
        overlap_size: usize,
        top_k: usize,
    ) -> Result<Self, Vec<String>> {
        let budget = Self {
            max_context_chars,
            segment_size,
            overlap_size,
            top_k,
        };
        let issues = budget.validate();
        if issues.is_empty() {
            Ok(budget)
        } else {
            Err(issues)
        }
    }

    // ==================== Accessors ====================

    pub fn max_context_chars(&self) -> usize {
        self.max_context_chars
    }

    pub fn segment_size(&self) -> usize {
        self.segment_size
    }

    pub fn overlap_size(&self) -> usize {
        self.overlap_size
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    // ==================== Validation ====================

    /// Validate this budget, returning a list of issues.
    ///
    /// Rules:
    /// - `segment_size >= 1`
    /// - `overlap_size < segment_size`
    /// - `segment_size <= max_context_chars`
    /// - `top_k >= 1`
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.segment_size < 1 {
            issues.push("context: segment_size must be >= 1".to_string());
        }
        if self.overlap_size >= self.segment_size {
            issues.push(format!(
                "context: overlap_size ({}) must be < segment_size ({})",
                self.overlap_size, self.segment_size
            ));
        }
        if self.segment_size > self.max_context_chars {
            issues.push(format!(
                "context: segment_size ({}) must be <= max_context_chars ({})",
                self.segment_size, self.max_context_chars
            ));
        }
        if self.top_k < 1 {
            issues.push("context: top_k must be >= 1".to_string());
        }
        issues
    }
}

impl Default for ContextBudget {
    /// Default: 30k chars total, 4k-char segments with 400 overlap, top 6.
    fn default() -> Self {
        Self {
            max_context_chars: 30_000,
            segment_size: 4_000,
            overlap_size: 400,
            top_k: 6,
        }
    }
}
