//! Debate configuration container.
//!
//! [`DebateConfig`] groups the debate rules and the persona roster, the two
//! pieces every agent and use case reads from. Both are fixed once the
//! process has loaded its configuration.

use agora_domain::{DebateRules, Persona, PersonaProfile, PersonaRoster};

/// Rules plus persona profiles for one process
#[derive(Debug, Clone, Default)]
pub struct DebateConfig {
    rules: DebateRules,
    roster: PersonaRoster,
}

impl DebateConfig {
    pub fn new(rules: DebateRules, roster: PersonaRoster) -> Self {
        Self { rules, roster }
    }

    pub fn rules(&self) -> &DebateRules {
        &self.rules
    }

    pub fn roster(&self) -> &PersonaRoster {
        &self.roster
    }

    pub fn profile(&self, persona: Persona) -> &PersonaProfile {
        self.roster.get(persona)
    }

    // ==================== Builder Methods ====================

    pub fn with_rules(mut self, rules: DebateRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.rules.max_rounds = max_rounds;
        self
    }

    pub fn with_roster(mut self, roster: PersonaRoster) -> Self {
        self.roster = roster;
        self
    }
}
