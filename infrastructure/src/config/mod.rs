//! Configuration file loading for agora
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `AGORA_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./agora.toml` or `./.agora.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/agora/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileBedrockConfig, FileConfig, FileDebateConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FilePersonaConfig, FilePersonasConfig, FileProvidersConfig,
    FileSlackConfig, FileStoreConfig,
};
pub use loader::ConfigLoader;
