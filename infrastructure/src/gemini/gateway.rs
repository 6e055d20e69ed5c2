//! Gemini LLM Gateway implementation

use super::error::GeminiError;
use super::types::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use covenant_application::{Candidate, GatewayError, LlmGateway};
use covenant_domain::ModelId;
use covenant_domain::core::string::truncate;
use std::time::Duration;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Connection settings for [`GeminiGateway`]
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub base_url: String,
    pub api_key: String,
    pub connect_timeout: Duration,
}

/// LLM Gateway implementation for the Gemini REST API
pub struct GeminiGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiGateway {
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        if config.api_key.trim().is_empty() {
            return Err(GeminiError::MissingApiKey);
        }
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    fn endpoint(&self, model: &ModelId) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            model.as_str()
        )
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn generate_text(
        &self,
        model: &ModelId,
        prompt: &str,
    ) -> Result<Vec<Candidate>, GatewayError> {
        debug!(model = %model, prompt_chars = prompt.chars().count(), "Calling generateContent");

        let response = self
            .client
            .post(self.endpoint(model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest::user_prompt(prompt))
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = classify_status(status.as_u16(), &body);
            warn!(status = status.as_u16(), "Gemini API error: {}", error);
            return Err(error);
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.without_url().to_string()))?;

        if body.candidates.is_empty()
            && let Some(reason) = body
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.as_deref())
        {
            warn!(reason, "Prompt was blocked");
        }

        Ok(body
            .candidates
            .iter()
            .map(|c| Candidate {
                text: c.text(),
                finish_reason: c.finish_reason.clone(),
            })
            .collect())
    }
}

/// Error text never carries the request URL.
fn classify_transport(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Transport(error.without_url().to_string())
    }
}

/// Map a non-2xx response; 408, 429 and 5xx are worth retrying.
fn classify_status(status: u16, body: &str) -> GatewayError {
    let message = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => match parsed.error.status {
            Some(code) => format!("{code}: {}", parsed.error.message),
            None => parsed.error.message,
        },
        Err(_) => format!("HTTP {status}: {}", truncate(body, 200)),
    };
    GatewayError::Backend {
        status,
        message,
        retryable: status == 408 || status == 429 || status >= 500,
    }
}
