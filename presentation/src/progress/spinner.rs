//! Spinner shown while an answer is awaited

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner for a single pending answer.
///
/// Hidden when progress output is disabled, so callers need not branch.
pub struct AnswerSpinner {
    bar: ProgressBar,
}

impl AnswerSpinner {
    pub fn start(message: &str, enabled: bool) -> Self {
        let bar = if enabled {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(Self::style());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
