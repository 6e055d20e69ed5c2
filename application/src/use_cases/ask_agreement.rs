//! Ask Agreement use case
//!
//! Answers one question about one agreement:
//! validate → authorize → assemble context → render prompt → answer.

use crate::config::AskConfig;
use crate::ports::agreement_repository::AgreementRepository;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::question_answerer::{AskError, QuestionAnswerer};
use crate::use_cases::answer_question::AnswerService;
use crate::use_cases::authorize::AuthorizationGate;
use async_trait::async_trait;
use covenant_domain::core::string::truncate;
use covenant_domain::{
    AgreementId, AssemblyStrategy, ContextAssembler, ModelId, OwnerId, PromptTemplate, Question,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Use case for asking a question about a stored agreement
pub struct AskAgreementUseCase {
    gate: AuthorizationGate,
    assembler: ContextAssembler,
    answers: AnswerService,
    model: ModelId,
}

impl AskAgreementUseCase {
    pub fn new(
        repository: Arc<dyn AgreementRepository>,
        gateway: Arc<dyn LlmGateway>,
        config: AskConfig,
    ) -> Self {
        Self {
            gate: AuthorizationGate::new(repository),
            assembler: ContextAssembler::new(config.budget),
            answers: AnswerService::new(gateway, &config.answer),
            model: config.model,
        }
    }

    /// Execute the use case
    pub async fn execute(
        &self,
        agreement_id: &AgreementId,
        identity: &OwnerId,
        question: &str,
    ) -> Result<String, AskError> {
        let started = Instant::now();
        let question = Question::try_new(question).ok_or(AskError::Validation)?;

        debug!(question = %truncate(question.content(), 80), "Validated question");
        let agreement = self.gate.load(agreement_id, identity).await?;

        let context = self
            .assembler
            .assemble(agreement.original_text(), question.content());
        match context.strategy {
            AssemblyStrategy::Excerpts {
                segments_total,
                segments_selected,
                spans,
            } => debug!(
                segments_total,
                segments_selected, spans, "Agreement exceeds budget, using excerpts"
            ),
            strategy => debug!(?strategy, "Context assembled"),
        }

        let prompt = PromptTemplate::render(question.content(), &context.text);

        info!(
            agreement = %agreement_id,
            model = %self.model,
            question_chars = question.char_len(),
            context_chars = context.char_len(),
            "Asking backend"
        );
        let answer = self.answers.answer(&self.model, &prompt).await?;
        info!(
            agreement = %agreement_id,
            attempts = answer.attempts,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Answer ready"
        );

        Ok(answer.text)
    }
}

#[async_trait]
impl QuestionAnswerer for AskAgreementUseCase {
    async fn ask(
        &self,
        agreement_id: &AgreementId,
        identity: &OwnerId,
        question: &str,
    ) -> Result<String, AskError> {
        self.execute(agreement_id, identity, question).await
    }
}
