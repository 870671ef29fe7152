//! Inbound action tags and outbound phase hints

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Inbound action tag selecting an orchestrator entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Initialize,
    Respond,
    FactCheck,
    Summarize,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Initialize => "initialize",
            Action::Respond => "respond",
            Action::FactCheck => "fact_check",
            Action::Summarize => "summarize",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "initialize" => Ok(Action::Initialize),
            "respond" => Ok(Action::Respond),
            "fact_check" => Ok(Action::FactCheck),
            "summarize" => Ok(Action::Summarize),
            other => Err(DomainError::UnknownAction(other.to_string())),
        }
    }
}

/// Hint attached to an utterance telling the caller which phase comes next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextAction {
    Continue,
    ClosingStatements,
    FactCheck,
    Summarize,
    Complete,
}
