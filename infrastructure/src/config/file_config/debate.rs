//! Debate rules from TOML (`[debate]` section)

use agora_domain::DebateRules;
use serde::{Deserialize, Serialize};

/// Raw debate rules from TOML
///
/// # Example
///
/// ```toml
/// [debate]
/// max_rounds = 6
/// opening_word_limit = 250
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    pub max_rounds: u32,
    pub opening_word_limit: u32,
    pub followup_word_limit: u32,
    pub closing_word_limit: u32,
    pub session_ttl_days: u32,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        let rules = DebateRules::default();
        Self {
            max_rounds: rules.max_rounds,
            opening_word_limit: rules.opening_word_limit,
            followup_word_limit: rules.followup_word_limit,
            closing_word_limit: rules.closing_word_limit,
            session_ttl_days: rules.session_ttl_days,
        }
    }
}

impl FileDebateConfig {
    pub fn to_rules(&self) -> DebateRules {
        DebateRules {
            max_rounds: self.max_rounds,
            opening_word_limit: self.opening_word_limit,
            followup_word_limit: self.followup_word_limit,
            closing_word_limit: self.closing_word_limit,
            session_ttl_days: self.session_ttl_days,
        }
    }
}
