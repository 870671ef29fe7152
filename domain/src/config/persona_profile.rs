//! Persona profiles: who each persona is and how it is generated

use crate::core::generation::GenerationParams;
use crate::core::model::Model;
use crate::debate::Persona;

/// Identity and generation settings for one persona
#[derive(Debug, Clone, PartialEq)]
pub struct PersonaProfile {
    pub persona: Persona,
    /// Display name used in prompts and on the chat surface
    pub name: String,
    pub model: Model,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Free-text personality, woven into the system prompt
    pub personality: String,
}

impl PersonaProfile {
    /// Built-in profile for `persona`
    pub fn default_for(persona: Persona) -> Self {
        let (name, model, temperature, max_tokens, personality) = match persona {
            Persona::Orchestrator => (
                "C-3PO",
                Model::ClaudeSonnet35V2,
                0.7,
                4096,
                "warm, diplomatic, meticulous about protocol",
            ),
            Persona::DebaterA => (
                "Sonny",
                Model::ClaudeSonnet35V2,
                0.8,
                2048,
                "philosophical, analytical, principled - argues from first principles",
            ),
            Persona::DebaterB => (
                "Ava",
                Model::ClaudeSonnet35V2,
                0.8,
                2048,
                "strategic, persuasive, adaptive - argues with rhetorical sophistication",
            ),
            Persona::FactChecker => (
                "K-9",
                Model::ClaudeHaiku35,
                0.3,
                2048,
                "precise, bureaucratic, terse",
            ),
            Persona::Summariser => (
                "GERTY",
                Model::ClaudeSonnet35V2,
                0.5,
                3072,
                "fair-minded, intellectually honest, truth-seeking",
            ),
        };

        Self {
            persona,
            name: name.to_string(),
            model,
            temperature,
            max_tokens,
            personality: personality.to_string(),
        }
    }

    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams::new(self.model.clone(), self.temperature, self.max_tokens)
    }
}

/// Profiles for all five personas
#[derive(Debug, Clone, PartialEq)]
pub struct PersonaRoster {
    profiles: [PersonaProfile; 5],
}

impl Default for PersonaRoster {
    fn default() -> Self {
        Self {
            profiles: Persona::ALL.map(PersonaProfile::default_for),
        }
    }
}

impl PersonaRoster {
    pub fn get(&self, persona: Persona) -> &PersonaProfile {
        &self.profiles[Self::index(persona)]
    }

    /// Replace the profile for `profile.persona`
    pub fn with_profile(mut self, profile: PersonaProfile) -> Self {
        let index = Self::index(profile.persona);
        self.profiles[index] = profile;
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonaProfile> {
        self.profiles.iter()
    }

    fn index(persona: Persona) -> usize {
        match persona {
            Persona::Orchestrator => 0,
            Persona::DebaterA => 1,
            Persona::DebaterB => 2,
            Persona::FactChecker => 3,
            Persona::Summariser => 4,
        }
    }
}
