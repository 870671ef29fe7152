//! Secret/token store port

use agora_domain::BotGroup;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenStoreError {
    #[error("No token configured for {0}")]
    Missing(BotGroup),

    #[error("Token lookup failed: {0}")]
    Lookup(String),
}

/// Credential lookup for a chat bot identity.
///
/// Implementations may cache tokens for the lifetime of the process.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn get_token(&self, group: BotGroup) -> Result<String, TokenStoreError>;
}
