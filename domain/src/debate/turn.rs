//! Turn selection for the `respond` action.
//!
//! | Last speaker          | Next turn                              |
//! |-----------------------|----------------------------------------|
//! | none / orchestrator   | Debater A                              |
//! | Debater A             | Debater B                              |
//! | Debater B             | round boundary (continue-or-close)     |
//! | anyone else           | error                                  |
//!
//! The round boundary is the one decision this table cannot make on its
//! own; the caller resolves it with [`Turn::after_verdict`].

use super::message::DebateMessage;
use super::persona::Persona;
use super::transcript::last_persona;
use super::verdict::Verdict;
use crate::core::error::DomainError;

/// Outcome of turn selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// A debater speaks next
    Debater(Persona),
    /// Debater B just finished a round; ask whether to continue
    RoundBoundary,
    /// The host calls for closing statements
    CallForClosing,
}

impl Turn {
    /// Resolve a round boundary with the host's verdict.
    ///
    /// Any other turn is returned unchanged.
    pub fn after_verdict(self, verdict: Verdict) -> Turn {
        match (self, verdict) {
            (Turn::RoundBoundary, Verdict::Continue) => Turn::Debater(Persona::DebaterA),
            (Turn::RoundBoundary, Verdict::Close) => Turn::CallForClosing,
            (turn, _) => turn,
        }
    }
}

/// Decide who acts next given the transcript so far.
pub fn select_next_turn(messages: &[DebateMessage]) -> Result<Turn, DomainError> {
    match last_persona(messages) {
        None | Some(Persona::Orchestrator) => Ok(Turn::Debater(Persona::DebaterA)),
        Some(Persona::DebaterA) => Ok(Turn::Debater(Persona::DebaterB)),
        Some(Persona::DebaterB) => Ok(Turn::RoundBoundary),
        Some(Persona::FactChecker | Persona::Summariser) => Err(DomainError::UnresolvableSpeaker),
    }
}
