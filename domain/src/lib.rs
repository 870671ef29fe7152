//! Domain layer for agora
//!
//! This crate contains the core debate rules, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Personas
//!
//! Five fixed identities take part in every debate: a host (orchestrator),
//! two debaters, a fact-checker and a summariser.
//!
//! ## Turn-taking
//!
//! The host never remembers anything between calls. Given the transcript
//! so far, [`select_next_turn`] says who speaks next, and
//! [`DebateSession::record_turn`] says what that utterance does to the
//! session (status, round, sequence).

pub mod config;
pub mod core;
pub mod debate;
pub mod prompt;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, DebateRules, OutputFormat, PersonaProfile, PersonaRoster,
    Severity,
};
pub use core::{
    error::DomainError,
    generation::GenerationParams,
    model::Model,
    string::{truncate, word_count},
};
pub use debate::{
    Action, AgentResponse, BotGroup, DebateMessage, DebateSession, DebateStatus,
    DebaterPositions, NextAction, Persona, Position, ResponseMetadata, Role, Turn, Verdict,
    select_next_turn, transcript,
};
pub use prompt::DebatePromptTemplate;
