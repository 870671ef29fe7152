//! Persona overrides from TOML (`[personas.<key>]` tables)

use agora_domain::{ConfigIssue, ConfigIssueCode, Model, Persona, PersonaProfile, PersonaRoster};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Optional overrides for one persona's built-in profile
///
/// # Example
///
/// ```toml
/// [personas.fact_checker]
/// model = "claude-haiku-4.5"
/// temperature = 0.2
///
/// [personas.debater_b]
/// name = "Marvin"
/// personality = "gloomy, exhaustive, reluctantly brilliant"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePersonaConfig {
    pub name: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub personality: Option<String>,
}

impl FilePersonaConfig {
    /// Apply the overrides on top of `profile`
    pub fn apply(&self, mut profile: PersonaProfile) -> PersonaProfile {
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(model) = self.model.as_deref().filter(|m| !m.trim().is_empty()) {
            profile.model = model.parse().unwrap_or_else(|never| match never {});
        }
        if let Some(temperature) = self.temperature {
            profile.temperature = temperature;
        }
        if let Some(max_tokens) = self.max_tokens {
            profile.max_tokens = max_tokens;
        }
        if let Some(personality) = &self.personality {
            profile.personality = personality.clone();
        }
        profile
    }
}

/// All persona tables, keyed by persona id
pub type FilePersonasConfig = BTreeMap<String, FilePersonaConfig>;

/// Build the roster from the built-in profiles plus any overrides.
///
/// Unknown keys and empty model names are reported, not fatal.
pub fn to_roster(personas: &FilePersonasConfig) -> (PersonaRoster, Vec<ConfigIssue>) {
    let mut roster = PersonaRoster::default();
    let mut issues = Vec::new();

    for (key, overrides) in personas {
        let Ok(persona) = key.parse::<Persona>() else {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::UnknownKey {
                    field: format!("personas.{key}"),
                },
                format!(
                    "personas.{key}: unknown persona (expected one of {})",
                    Persona::ALL.map(|p| p.as_str()).join(", ")
                ),
            ));
            continue;
        };
        if overrides.model.as_deref().is_some_and(|m| m.trim().is_empty()) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: format!("personas.{key}.model"),
                },
                format!("personas.{key}.model: model name cannot be empty"),
            ));
        }
        let profile = overrides.apply(roster.get(persona).clone());
        issues.extend(profile.validate());
        roster = roster.with_profile(profile);
    }

    (roster, issues)
}
