//! Structured configuration issues.
//!
//! Config loaders validate numeric constraints and report what they
//! found as [`ConfigIssue`]s instead of failing outright.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A numeric constraint was violated; defaults were used instead.
    InvalidConstraint { field: String },
    /// A required value (e.g. a secret) is missing.
    MissingValue { field: String },
    /// A value could not be parsed.
    InvalidValue { field: String, value: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_constructors() {
        let w = ConfigIssue::warning(
            ConfigIssueCode::InvalidConstraint {
                field: "context".to_string(),
            },
            "bad",
        );
        assert!(!w.is_error());

        let e = ConfigIssue::error(
            ConfigIssueCode::MissingValue {
                field: "server.jwt_secret".to_string(),
            },
            "missing",
        );
        assert!(e.is_error());
        assert_eq!(e.message, "missing");
    }
}
