//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types after
//! validation.

mod answer;
mod backend;
mod context;
mod server;
mod store;

pub use answer::FileAnswerConfig;
pub use backend::{DEFAULT_BASE_URL, FileBackendConfig};
pub use context::FileContextConfig;
pub use server::{DEFAULT_BIND, FileServerConfig};
pub use store::FileStoreConfig;

use covenant_application::AskConfig;
use covenant_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Context assembly limits
    pub context: FileContextConfig,
    /// Backend call control
    pub answer: FileAnswerConfig,
    /// Generation backend
    pub backend: FileBackendConfig,
    /// HTTP server
    pub server: FileServerConfig,
    /// Agreement store
    pub store: FileStoreConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Issues are ordered by section. Warnings mean a default was used;
    /// errors mean the configuration cannot work.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.context.to_context_budget().1);
        issues.extend(self.answer.to_answer_params().1);
        issues.extend(self.backend.validate());
        issues.extend(self.server.validate());

        if self.store.path.is_none() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingValue {
                    field: "store.path".to_string(),
                },
                "store.path is not set; no agreements are available",
            ));
        }

        issues
    }

    /// Build the ask pipeline configuration, falling back to defaults for
    /// invalid values.
    pub fn to_ask_config(&self) -> AskConfig {
        AskConfig::new(
            self.backend.parse_model().0,
            self.context.to_context_budget().0,
            self.answer.to_answer_params().0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_domain::{ContextBudget, ModelId};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[context]
max_context_chars = 20000
segment_size = 2000
overlap_size = 200
top_k = 4

[answer]
timeout_ms = 10000
max_retries = 2
backoff_base_ms = 250

[backend]
base_url = "http://localhost:9999"
model = "gemini-1.5-flash"
api_key = "secret-key"

[server]
bind = "0.0.0.0:5000"
jwt_secret = "jwt-secret"

[store]
path = "/var/lib/covenant/agreements.json"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_empty());

        let ask = config.to_ask_config();
        assert_eq!(ask.model, ModelId::new("gemini-1.5-flash").unwrap());
        assert_eq!(ask.budget.max_context_chars(), 20_000);
        assert_eq!(ask.answer.max_retries, 2);
        assert_eq!(config.backend.api_key(), Some("secret-key"));
        assert_eq!(config.server.jwt_secret(), Some("jwt-secret"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[answer]
max_retries = 5
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.answer.max_retries, 5);
        // Defaults should apply
        assert_eq!(config.answer.timeout_ms, 30_000);
        assert_eq!(config.context, FileContextConfig::default());
        assert_eq!(config.backend.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_default_config_warns_about_missing_values() {
        let issues = FileConfig::default().validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| !i.is_error()));
        assert!(issues.iter().all(|i| matches!(
            &i.code,
            ConfigIssueCode::MissingValue { field } if field == "backend.api_key" || field == "store.path"
        )));
    }

    #[test]
    fn test_invalid_budget_uses_default() {
        let toml_str = r#"
[context]
overlap_size = 9000
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.to_ask_config().budget, ContextBudget::default());
    }
}
