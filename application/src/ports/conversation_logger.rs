//! Debate record port
//!
//! Every saved turn, every phase change and every started debate is handed to
//! a [`ConversationLogger`] as one [`ConversationEvent`]. A debate can be
//! replayed from this record alone; `tracing` output is for operators and
//! carries no transcript text.

use serde_json::Value;

/// One entry in a debate's record
pub struct ConversationEvent {
    /// `"debate_started"`, `"turn"` or `"status_change"`
    pub event_type: &'static str,
    /// Always carries `debate_id`; a `turn` also carries the full utterance
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Sink for debate records.
///
/// Called after the session has been saved. A sink that cannot write drops
/// the event; the debate carries on.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Discards every event
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
