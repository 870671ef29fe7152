//! Progress notification port
//!
//! Defines the interface for reporting progress while a debate runs.

use agora_domain::{Action, AgentResponse, DebateStatus, PersonaProfile};

/// Callback for progress updates during a debate
///
/// Implementations live in the presentation layer.
pub trait DebateProgressNotifier: Send + Sync {
    /// Called before a turn's model call(s) start
    fn on_turn_start(&self, action: Action, debate_id: &str);

    /// Called once a persona has produced its utterance
    fn on_turn_complete(&self, speaker: &PersonaProfile, response: &AgentResponse);

    /// Called when a turn failed; the session is left unchanged
    fn on_turn_failed(&self, _action: Action, _error: &str) {}

    /// Called when the session's status moves forward
    fn on_status_change(&self, _from: DebateStatus, _to: DebateStatus) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DebateProgressNotifier for NoProgress {
    fn on_turn_start(&self, _action: Action, _debate_id: &str) {}
    fn on_turn_complete(&self, _speaker: &PersonaProfile, _response: &AgentResponse) {}
}
