//! Debater stances

use super::persona::Persona;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A debater's assigned stance on the proposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    For,
    Against,
}

impl Position {
    pub fn complement(&self) -> Position {
        match self {
            Position::For => Position::Against,
            Position::Against => Position::For,
        }
    }

    /// Upper-case label used in prompts ("FOR" / "AGAINST")
    pub fn label(&self) -> &'static str {
        match self {
            Position::For => "FOR",
            Position::Against => "AGAINST",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::For => f.write_str("for"),
            Position::Against => f.write_str("against"),
        }
    }
}

/// Positions of both debaters.
///
/// Always complementary: the only constructor derives Debater B's stance
/// from Debater A's, and deserialization rejects two equal stances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPositions", into = "RawPositions")]
pub struct DebaterPositions {
    debater_a: Position,
}

impl DebaterPositions {
    pub fn new(debater_a: Position) -> Self {
        Self { debater_a }
    }

    pub fn debater_a(&self) -> Position {
        self.debater_a
    }

    pub fn debater_b(&self) -> Position {
        self.debater_a.complement()
    }

    /// Position of `persona`, `None` for non-debaters
    pub fn position_of(&self, persona: Persona) -> Option<Position> {
        match persona {
            Persona::DebaterA => Some(self.debater_a()),
            Persona::DebaterB => Some(self.debater_b()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawPositions {
    debater_a: Position,
    debater_b: Position,
}

impl TryFrom<RawPositions> for DebaterPositions {
    type Error = DomainError;

    fn try_from(raw: RawPositions) -> Result<Self, Self::Error> {
        if raw.debater_a == raw.debater_b {
            return Err(DomainError::InvalidPositions(format!(
                "both debaters hold '{}'",
                raw.debater_a
            )));
        }
        Ok(Self::new(raw.debater_a))
    }
}

impl From<DebaterPositions> for RawPositions {
    fn from(positions: DebaterPositions) -> Self {
        Self {
            debater_a: positions.debater_a(),
            debater_b: positions.debater_b(),
        }
    }
}
