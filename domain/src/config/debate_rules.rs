//! Debate rules (round ceiling and word budgets)

use chrono::Duration;

/// Rules every debate is created with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebateRules {
    /// Round ceiling, fixed at session creation
    pub max_rounds: u32,
    /// Advisory word budget for opening statements
    pub opening_word_limit: u32,
    /// Advisory word budget for rebuttals
    pub followup_word_limit: u32,
    /// Advisory word budget for closing statements
    pub closing_word_limit: u32,
    /// Days until an idle session may be purged
    pub session_ttl_days: u32,
}

impl Default for DebateRules {
    fn default() -> Self {
        Self {
            max_rounds: 8,
            opening_word_limit: 200,
            followup_word_limit: 150,
            closing_word_limit: 200,
            session_ttl_days: 30,
        }
    }
}

impl DebateRules {
    pub fn session_ttl(&self) -> Duration {
        Duration::days(i64::from(self.session_ttl_days))
    }
}
