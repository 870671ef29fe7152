//! Chat credentials from TOML (`[slack]` section)

use agora_domain::BotGroup;
use serde::{Deserialize, Serialize};

/// Names of the environment variables holding each bot's token.
///
/// Tokens themselves never live in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSlackConfig {
    pub orchestrator_token_env: String,
    pub debater_a_token_env: String,
    pub debater_b_token_env: String,
    /// Web API base URL
    pub api_base: String,
}

impl Default for FileSlackConfig {
    fn default() -> Self {
        Self {
            orchestrator_token_env: "SLACK_ORCHESTRATOR_BOT_TOKEN".to_string(),
            debater_a_token_env: "SLACK_DEBATER_A_BOT_TOKEN".to_string(),
            debater_b_token_env: "SLACK_DEBATER_B_BOT_TOKEN".to_string(),
            api_base: "https://slack.com/api".to_string(),
        }
    }
}

impl FileSlackConfig {
    pub fn token_env(&self, group: BotGroup) -> &str {
        match group {
            BotGroup::Orchestrator => &self.orchestrator_token_env,
            BotGroup::DebaterA => &self.debater_a_token_env,
            BotGroup::DebaterB => &self.debater_b_token_env,
        }
    }
}
