//! Chat-posting port

use super::token_store::TokenStoreError;
use agora_domain::BotGroup;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatPostError {
    #[error("Credential error: {0}")]
    Credential(#[from] TokenStoreError),

    #[error("Chat platform rejected the message: {0}")]
    Rejected(String),

    #[error("Chat transport error: {0}")]
    Transport(String),
}

/// Outbound "post text to a channel thread" primitive
#[async_trait]
pub trait ChatPoster: Send + Sync {
    /// Post `text` as `group` into `thread_ts` of `channel`.
    ///
    /// Returns the platform's id for the posted message, when it has one.
    async fn post_message(
        &self,
        group: BotGroup,
        channel: &str,
        thread_ts: &str,
        text: &str,
    ) -> Result<Option<String>, ChatPostError>;
}

/// Poster that drops every message (tests, dry runs)
pub struct NoChatPoster;

#[async_trait]
impl ChatPoster for NoChatPoster {
    async fn post_message(
        &self,
        _group: BotGroup,
        _channel: &str,
        _thread_ts: &str,
        _text: &str,
    ) -> Result<Option<String>, ChatPostError> {
        Ok(None)
    }
}
