//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod debate;
mod logging;
mod output;
mod personas;
mod providers;
mod slack;
mod store;

pub use debate::FileDebateConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use personas::{FilePersonaConfig, FilePersonasConfig, to_roster};
pub use providers::{FileBedrockConfig, FileProvidersConfig};
pub use slack::FileSlackConfig;
pub use store::FileStoreConfig;

use agora_application::DebateConfig;
use agora_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Round ceiling, word budgets and session lifetime
    pub debate: FileDebateConfig,
    /// Per-persona profile overrides
    pub personas: FilePersonasConfig,
    /// Model provider settings
    pub providers: FileProvidersConfig,
    /// Chat bot credentials
    pub slack: FileSlackConfig,
    /// Session storage
    pub store: FileStoreConfig,
    /// Conversation log
    pub logging: FileLoggingConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Rules and roster for the application layer, with every issue found
    /// while building them.
    pub fn to_debate_config(&self) -> (DebateConfig, Vec<ConfigIssue>) {
        let rules = self.debate.to_rules();
        let mut issues = rules.validate();
        let (roster, roster_issues) = to_roster(&self.personas);
        issues.extend(roster_issues);
        (DebateConfig::new(rules, roster), issues)
    }

    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.to_debate_config().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_domain::{OutputFormat, Persona};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[debate]
max_rounds = 4
closing_word_limit = 120

[personas.orchestrator]
name = "Robby"

[providers.bedrock]
region = "us-west-2"
cross_region = true

[slack]
orchestrator_token_env = "HOST_TOKEN"

[store]
dir = "/var/lib/agora"

[logging]
conversation_log = "debates.jsonl"

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let (debate, issues) = config.to_debate_config();

        assert!(issues.is_empty());
        assert_eq!(debate.rules().max_rounds, 4);
        assert_eq!(debate.rules().closing_word_limit, 120);
        assert_eq!(debate.profile(Persona::Orchestrator).name, "Robby");
        assert!(config.providers.bedrock.cross_region);
        assert_eq!(config.slack.orchestrator_token_env, "HOST_TOKEN");
        assert_eq!(config.slack.debater_a_token_env, "SLACK_DEBATER_A_BOT_TOKEN");
        assert_eq!(
            config.store.dir.as_deref(),
            Some(std::path::Path::new("/var/lib/agora"))
        );
        assert_eq!(
            config.logging.conversation_log.as_deref(),
            Some(std::path::Path::new("debates.jsonl"))
        );
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_zero_rounds_reported() {
        let config: FileConfig = toml::from_str("[debate]\nmax_rounds = 0\n").unwrap();
        assert_eq!(config.validate().len(), 1);
    }
}
