//! The five fixed debate identities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// One of the five fixed personas taking part in a debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    /// Hosts the debate and decides when it ends
    Orchestrator,
    /// First debater, always opens
    DebaterA,
    /// Second debater, always answers Debater A
    DebaterB,
    FactChecker,
    Summariser,
}

impl Persona {
    pub const ALL: [Persona; 5] = [
        Persona::Orchestrator,
        Persona::DebaterA,
        Persona::DebaterB,
        Persona::FactChecker,
        Persona::Summariser,
    ];

    /// Stable identifier used on the wire and in config keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Orchestrator => "orchestrator",
            Persona::DebaterA => "debater_a",
            Persona::DebaterB => "debater_b",
            Persona::FactChecker => "fact_checker",
            Persona::Summariser => "summariser",
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Persona::Orchestrator => Role::Orchestrator,
            Persona::DebaterA | Persona::DebaterB => Role::Debater,
            Persona::FactChecker => Role::FactChecker,
            Persona::Summariser => Role::Summariser,
        }
    }

    pub fn is_debater(&self) -> bool {
        matches!(self, Persona::DebaterA | Persona::DebaterB)
    }

    /// The other debater, `None` for non-debaters
    pub fn opponent(&self) -> Option<Persona> {
        match self {
            Persona::DebaterA => Some(Persona::DebaterB),
            Persona::DebaterB => Some(Persona::DebaterA),
            _ => None,
        }
    }

    /// Chat identity this persona posts under.
    ///
    /// Only the host and the two debaters have their own bot; the
    /// fact-checker and summariser post through the host.
    pub fn bot_group(&self) -> BotGroup {
        match self {
            Persona::DebaterA => BotGroup::DebaterA,
            Persona::DebaterB => BotGroup::DebaterB,
            Persona::Orchestrator | Persona::FactChecker | Persona::Summariser => {
                BotGroup::Orchestrator
            }
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Persona {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Persona::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| DomainError::UnknownPersona(s.to_string()))
    }
}

/// Functional role of a persona in the outbound response envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Orchestrator,
    Debater,
    FactChecker,
    Summariser,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Orchestrator => "orchestrator",
            Role::Debater => "debater",
            Role::FactChecker => "fact_checker",
            Role::Summariser => "summariser",
        }
    }
}

/// Chat bot identity, one credential each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotGroup {
    Orchestrator,
    DebaterA,
    DebaterB,
}

impl BotGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            BotGroup::Orchestrator => "orchestrator",
            BotGroup::DebaterA => "debater_a",
            BotGroup::DebaterB => "debater_b",
        }
    }
}

impl std::fmt::Display for BotGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
