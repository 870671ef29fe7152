//! Outbound result envelope produced by every persona agent

use super::action::NextAction;
use super::persona::{Persona, Role};
use super::position::DebaterPositions;
use crate::core::string::word_count;
use serde::{Deserialize, Serialize};

/// One generated utterance plus the hints the caller needs to advance the
/// session (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub persona: Persona,
    /// Display name of the speaking persona (e.g. "C-3PO")
    pub name: String,
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_action: Option<NextAction>,
    pub metadata: ResponseMetadata,
}

/// Derived data attached to every response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub word_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debater_positions: Option<DebaterPositions>,
}

impl AgentResponse {
    pub fn new(
        persona: Persona,
        name: impl Into<String>,
        content: impl Into<String>,
        next_action: Option<NextAction>,
    ) -> Self {
        let content = content.into();
        Self {
            persona,
            name: name.into(),
            role: persona.role(),
            metadata: ResponseMetadata {
                word_count: word_count(&content),
                debater_positions: None,
            },
            content,
            next_action,
        }
    }

    pub fn with_positions(mut self, positions: DebaterPositions) -> Self {
        self.metadata.debater_positions = Some(positions);
        self
    }
}
