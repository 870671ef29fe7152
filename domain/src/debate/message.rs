//! Transcript entries

use super::persona::{Persona, Role};
use crate::core::string::word_count;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One utterance in a debate transcript (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateMessage {
    pub session_id: String,
    /// Position in the transcript, unique and increasing within a session
    pub sequence: u64,
    pub persona: Persona,
    pub content: String,
    /// Whitespace-delimited token count of `content`
    pub word_count: usize,
    pub timestamp: DateTime<Utc>,
    /// Chat-surface id of the posted message, once relayed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_ts: Option<String>,
}

impl DebateMessage {
    pub fn new(
        session_id: impl Into<String>,
        sequence: u64,
        persona: Persona,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let content = content.into();
        Self {
            session_id: session_id.into(),
            sequence,
            persona,
            word_count: word_count(&content),
            content,
            timestamp,
            chat_ts: None,
        }
    }

    pub fn role(&self) -> Role {
        self.persona.role()
    }
}
