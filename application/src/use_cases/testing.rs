//! Test doubles shared by the use case tests.

use crate::ports::agreement_repository::{AgreementRepository, RepositoryError};
use crate::ports::llm_gateway::{Candidate, GatewayError, LlmGateway};
use crate::ports::question_answerer::{AskError, QuestionAnswerer};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use covenant_domain::{Agreement, AgreementId, ModelId, OwnerId};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn agreement(id: &str, owner: &str, text: &str) -> Agreement {
    Agreement::new(
        AgreementId::new(id).unwrap(),
        OwnerId::new(owner).unwrap(),
        text,
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
    )
}

/// In-memory repository that counts lookups
#[derive(Default)]
pub struct FakeRepository {
    agreements: HashMap<AgreementId, Agreement>,
    lookups: AtomicUsize,
}

impl FakeRepository {
    pub fn with(agreements: Vec<Agreement>) -> Self {
        Self {
            agreements: agreements
                .into_iter()
                .map(|a| (a.id().clone(), a))
                .collect(),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AgreementRepository for FakeRepository {
    async fn find_by_id(&self, id: &AgreementId) -> Result<Option<Agreement>, RepositoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.agreements.get(id).cloned())
    }
}

pub struct FailingRepository;

#[async_trait]
impl AgreementRepository for FailingRepository {
    async fn find_by_id(&self, _id: &AgreementId) -> Result<Option<Agreement>, RepositoryError> {
        Err(RepositoryError::Storage("disk unavailable".to_string()))
    }
}

/// One scripted gateway reply
pub enum Step {
    Reply(Vec<Candidate>),
    Fail(GatewayError),
    /// Sleep before replying, to exercise timeouts
    Delay(Duration, Vec<Candidate>),
}

impl Step {
    pub fn text(text: &str) -> Self {
        Step::Reply(vec![Candidate::new(text)])
    }
}

/// Gateway that replays a script and records every prompt it receives
#[derive(Default)]
pub struct ScriptedGateway {
    script: Mutex<VecDeque<Step>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            script: Mutex::new(steps.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn generate_text(
        &self,
        _model: &ModelId,
        prompt: &str,
    ) -> Result<Vec<Candidate>, GatewayError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let step = self.script.lock().unwrap().pop_front();
        match step {
            Some(Step::Reply(candidates)) => Ok(candidates),
            Some(Step::Fail(error)) => Err(error),
            Some(Step::Delay(delay, candidates)) => {
                tokio::time::sleep(delay).await;
                Ok(candidates)
            }
            None => Err(GatewayError::Transport("script exhausted".to_string())),
        }
    }
}

/// Answerer that echoes questions after a per-question delay
#[derive(Default)]
pub struct EchoAnswerer {
    delays: HashMap<String, Duration>,
    failures: HashMap<String, AskError>,
    calls: AtomicUsize,
}

impl EchoAnswerer {
    pub fn delay(mut self, question: &str, delay: Duration) -> Self {
        self.delays.insert(question.to_string(), delay);
        self
    }

    pub fn fail(mut self, question: &str, error: AskError) -> Self {
        self.failures.insert(question.to_string(), error);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuestionAnswerer for EchoAnswerer {
    async fn ask(
        &self,
        _agreement_id: &AgreementId,
        _identity: &OwnerId,
        question: &str,
    ) -> Result<String, AskError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(question) {
            tokio::time::sleep(*delay).await;
        }
        match self.failures.get(question) {
            Some(error) => Err(error.clone()),
            None => Ok(format!("Answer to: {question}")),
        }
    }
}
