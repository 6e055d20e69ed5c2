//! HTTP server configuration from TOML (`[server]` section)

use covenant_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Listen address
    pub bind: String,
    /// HS256 secret shared with whoever issues tokens
    pub jwt_secret: Option<String>,
    /// Largest accepted request body
    pub body_limit_bytes: usize,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            jwt_secret: None,
            body_limit_bytes: 64 * 1024,
        }
    }
}

impl FileServerConfig {
    pub fn parse_bind(&self) -> (SocketAddr, Vec<ConfigIssue>) {
        match self.bind.parse() {
            Ok(addr) => (addr, vec![]),
            Err(_) => {
                let fallback: SocketAddr = ([127, 0, 0, 1], 5000).into();
                (
                    fallback,
                    vec![ConfigIssue::warning(
                        ConfigIssueCode::InvalidValue {
                            field: "server.bind".to_string(),
                            value: self.bind.clone(),
                        },
                        format!(
                            "server.bind: '{}' is not a socket address, using {}",
                            self.bind, fallback
                        ),
                    )],
                )
            }
        }
    }

    pub fn jwt_secret(&self) -> Option<&str> {
        self.jwt_secret.as_deref().filter(|s| !s.is_empty())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_bind().1;
        if self.body_limit_bytes == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidConstraint {
                    field: "server.body_limit_bytes".to_string(),
                },
                "server.body_limit_bytes must be >= 1",
            ));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bind() {
        let config = FileServerConfig {
            bind: "0.0.0.0:8080".to_string(),
            ..Default::default()
        };
        let (addr, issues) = config.parse_bind();
        assert!(issues.is_empty());
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_invalid_bind_falls_back() {
        let config = FileServerConfig {
            bind: "localhost".to_string(),
            ..Default::default()
        };
        let (addr, issues) = config.parse_bind();
        assert_eq!(addr.to_string(), DEFAULT_BIND);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_empty_secret_is_unset() {
        let config = FileServerConfig {
            jwt_secret: Some(String::new()),
            ..Default::default()
        };
        assert!(config.jwt_secret().is_none());
    }
}
