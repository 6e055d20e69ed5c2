//! Generation backend configuration from TOML (`[backend]` section)

use covenant_domain::{ConfigIssue, ConfigIssueCode, ModelId};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Generation backend configuration.
///
/// The API key is usually supplied through `COVENANT_BACKEND__API_KEY`
/// rather than written to a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub connect_timeout_ms: u64,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: ModelId::default().to_string(),
            api_key: None,
            connect_timeout_ms: 10_000,
        }
    }
}

impl FileBackendConfig {
    /// Parse the model name, falling back to the default model.
    pub fn parse_model(&self) -> (ModelId, Vec<ConfigIssue>) {
        match ModelId::new(&self.model) {
            Ok(model) => (model, vec![]),
            Err(_) => (
                ModelId::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidValue {
                        field: "backend.model".to_string(),
                        value: self.model.clone(),
                    },
                    format!(
                        "backend.model: '{}' is not a model name, using {}",
                        self.model,
                        ModelId::default()
                    ),
                )],
            ),
        }
    }

    /// The API key, if set and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_model().1;
        if self.api_key().is_none() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingValue {
                    field: "backend.api_key".to_string(),
                },
                "backend.api_key is not set; questions cannot be answered \
                 (set COVENANT_BACKEND__API_KEY)",
            ));
        }
        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::MissingValue {
                    field: "backend.base_url".to_string(),
                },
                "backend.base_url must not be empty",
            ));
        }
        issues
    }
}
