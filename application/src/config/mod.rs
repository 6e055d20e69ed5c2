//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`AnswerParams`]: backend call control (timeout, attempts, backoff)
//! - [`RetryPolicy`]: pure retry decision derived from [`AnswerParams`]
//! - [`AskConfig`]: everything the ask pipeline needs

pub mod answer_params;
pub mod ask_config;
pub mod retry_policy;

pub use answer_params::AnswerParams;
pub use ask_config::AskConfig;
pub use retry_policy::{RetryDecision, RetryPolicy};
