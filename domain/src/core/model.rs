//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Models a persona can be backed by (Value Object)
///
/// Anything not listed is carried verbatim as [`Model::Custom`], which lets
/// a config point a persona at a raw provider model id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    ClaudeSonnet35V2,
    ClaudeHaiku35,
    ClaudeSonnet4,
    ClaudeSonnet45,
    ClaudeHaiku45,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::ClaudeSonnet35V2 => "claude-3.5-sonnet-v2",
            Model::ClaudeHaiku35 => "claude-3.5-haiku",
            Model::ClaudeSonnet4 => "claude-sonnet-4",
            Model::ClaudeSonnet45 => "claude-sonnet-4.5",
            Model::ClaudeHaiku45 => "claude-haiku-4.5",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default debate model (Claude 3.5 Sonnet v2)
    fn default() -> Self {
        Model::ClaudeSonnet35V2
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "claude-3.5-sonnet-v2" => Model::ClaudeSonnet35V2,
            "claude-3.5-haiku" => Model::ClaudeHaiku35,
            "claude-sonnet-4" => Model::ClaudeSonnet4,
            "claude-sonnet-4.5" => Model::ClaudeSonnet45,
            "claude-haiku-4.5" => Model::ClaudeHaiku45,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s
            .parse()
            .unwrap_or_else(|never: std::convert::Infallible| match never {}))
    }
}
