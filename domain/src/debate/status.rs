//! Debate lifecycle status

use serde::{Deserialize, Serialize};

/// Lifecycle status of a debate.
///
/// Declaration order is the progression order; a session only ever moves
/// to a later variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebateStatus {
    Initializing,
    Opening,
    Debating,
    Closing,
    FactChecking,
    Summarizing,
    Completed,
}

impl DebateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebateStatus::Initializing => "initializing",
            DebateStatus::Opening => "opening",
            DebateStatus::Debating => "debating",
            DebateStatus::Closing => "closing",
            DebateStatus::FactChecking => "fact_checking",
            DebateStatus::Summarizing => "summarizing",
            DebateStatus::Completed => "completed",
        }
    }

    pub fn can_transition_to(&self, next: DebateStatus) -> bool {
        next > *self
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, DebateStatus::Completed)
    }

    /// Whether debaters are still exchanging arguments
    pub fn is_exchange(&self) -> bool {
        matches!(self, DebateStatus::Opening | DebateStatus::Debating)
    }
}

impl std::fmt::Display for DebateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
