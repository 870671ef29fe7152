//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};

/// AWS Bedrock settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBedrockConfig {
    /// AWS region for Bedrock models (default: "us-east-1")
    pub region: String,
    /// AWS profile name for credentials (default chain when unset)
    pub profile: Option<String>,
    /// Route on-demand models through cross-region inference profiles
    pub cross_region: bool,
}

impl Default for FileBedrockConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            profile: None,
            cross_region: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    pub bedrock: FileBedrockConfig,
}
