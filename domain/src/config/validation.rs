//! Configuration validation issues
//!
//! Loaded configuration is checked once at startup; every problem found is
//! reported as a [`ConfigIssue`] rather than failing on the first one.

use super::{DebateRules, PersonaProfile};

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
    /// A numeric value is outside its accepted range
    OutOfRange { field: String },
    /// A string value that must be set is empty
    EmptyValue { field: String },
    /// A table key that names nothing this program knows
    UnknownKey { field: String },
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
}

impl DebateRules {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.max_rounds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "debate.max_rounds".to_string(),
                },
                "debate.max_rounds must be at least 1",
            ));
        }
        for (field, value) in [
            ("debate.opening_word_limit", self.opening_word_limit),
            ("debate.followup_word_limit", self.followup_word_limit),
            ("debate.closing_word_limit", self.closing_word_limit),
        ] {
            if value == 0 {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::OutOfRange {
                        field: field.to_string(),
                    },
                    format!("{field} is 0; debaters will be asked for empty statements"),
                ));
            }
        }
        if self.session_ttl_days == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "debate.session_ttl_days".to_string(),
                },
                "debate.session_ttl_days is 0; sessions expire as soon as they are created",
            ));
        }

        issues
    }
}

impl PersonaProfile {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let key = self.persona.as_str();
        let mut issues = Vec::new();

        if self.name.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: format!("personas.{key}.name"),
                },
                format!("personas.{key}.name cannot be empty"),
            ));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: format!("personas.{key}.temperature"),
                },
                format!(
                    "personas.{key}.temperature {} is outside 0.0..=1.0 and will be clamped",
                    self.temperature
                ),
            ));
        }
        if self.max_tokens == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: format!("personas.{key}.max_tokens"),
                },
                format!("personas.{key}.max_tokens must be positive"),
            ));
        }

        issues
    }
}
