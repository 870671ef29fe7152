//! Domain error types

use crate::debate::{DebateStatus, Persona};
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Proposition must not be empty")]
    EmptyProposition,

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: DebateStatus, to: DebateStatus },

    #[error("Debate {0} is already completed")]
    DebateCompleted(String),

    #[error("Unable to determine next speaker")]
    UnresolvableSpeaker,

    #[error("{persona} cannot speak while the debate is {status}")]
    UnexpectedSpeaker {
        persona: Persona,
        status: DebateStatus,
    },

    #[error("{0} cannot speak twice in a row")]
    AlternationViolated(Persona),

    #[error("Debater positions already assigned")]
    PositionsAlreadyAssigned,

    #[error("Debater positions are missing")]
    PositionsMissing,

    #[error("Invalid debater positions: {0}")]
    InvalidPositions(String),

    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

impl DomainError {
    /// Whether the error was caused by the caller's input rather than the
    /// session's state.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyProposition
                | DomainError::UnresolvableSpeaker
                | DomainError::UnknownAction(_)
                | DomainError::UnknownPersona(_)
                | DomainError::InvalidPositions(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolvable_speaker_display() {
        assert_eq!(
            DomainError::UnresolvableSpeaker.to_string(),
            "Unable to determine next speaker"
        );
    }

    #[test]
    fn test_transition_display() {
        let error = DomainError::InvalidTransition {
            from: DebateStatus::Completed,
            to: DebateStatus::Opening,
        };
        assert_eq!(
            error.to_string(),
            "Invalid status transition: completed -> opening"
        );
    }

    #[test]
    fn test_precondition_classification() {
        assert!(DomainError::EmptyProposition.is_precondition());
        assert!(DomainError::UnknownAction("vote".into()).is_precondition());
        assert!(!DomainError::PositionsMissing.is_precondition());
    }
}
