//! Configuration for the ask pipeline.

use super::answer_params::AnswerParams;
use covenant_domain::{ContextBudget, ModelId};

/// Everything [`AskAgreementUseCase`](crate::use_cases::ask_agreement::AskAgreementUseCase)
/// needs besides its ports.
#[derive(Debug, Clone, Default)]
pub struct AskConfig {
    /// Generation model
    pub model: ModelId,
    /// Context assembly limits
    pub budget: ContextBudget,
    /// Backend call control
    pub answer: AnswerParams,
}

impl AskConfig {
    pub fn new(model: ModelId, budget: ContextBudget, answer: AnswerParams) -> Self {
        Self {
            model,
            budget,
            answer,
        }
    }

    pub fn with_model(mut self, model: ModelId) -> Self {
        self.model = model;
        self
    }

    pub fn with_budget(mut self, budget: ContextBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_answer(mut self, answer: AnswerParams) -> Self {
        self.answer = answer;
        self
    }
}
