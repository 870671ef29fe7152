//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod debate_rules;
mod output_format;
mod persona_profile;
pub mod validation;

pub use debate_rules::DebateRules;
pub use output_format::OutputFormat;
pub use persona_profile::{PersonaProfile, PersonaRoster};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
