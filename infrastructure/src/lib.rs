//! Infrastructure layer for agora
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod chat;
pub mod config;
pub mod logging;
pub mod providers;
pub mod secrets;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileBedrockConfig, FileConfig, FileDebateConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FilePersonaConfig, FilePersonasConfig,
    FileProvidersConfig, FileSlackConfig, FileStoreConfig,
};
pub use logging::JsonlConversationLogger;
pub use secrets::EnvTokenStore;
pub use store::{InMemorySessionStore, JsonFileSessionStore};

#[cfg(feature = "slack")]
pub use chat::SlackChatPoster;

#[cfg(feature = "bedrock")]
pub use providers::bedrock::BedrockModelInvoker;
