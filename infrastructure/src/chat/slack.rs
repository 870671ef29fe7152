//! Slack Web API chat poster
//!
//! Posts through `chat.postMessage` with the bearer token of the bot group
//! the persona belongs to. Slack answers HTTP 200 even for rejected calls,
//! so the `ok` flag in the body decides success.

use crate::config::FileSlackConfig;
use agora_application::ports::chat_poster::{ChatPostError, ChatPoster};
use agora_application::ports::token_store::TokenStore;
use agora_domain::BotGroup;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const POST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct PostMessageRequest<'a> {
    channel: &'a str,
    thread_ts: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    #[serde(default)]
    ts: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl PostMessageResponse {
    fn into_result(self) -> Result<Option<String>, ChatPostError> {
        if self.ok {
            Ok(self.ts)
        } else {
            Err(ChatPostError::Rejected(
                self.error.unwrap_or_else(|| "unknown_error".to_string()),
            ))
        }
    }
}

pub struct SlackChatPoster {
    http_client: reqwest::Client,
    endpoint: String,
    tokens: Arc<dyn TokenStore>,
}

impl SlackChatPoster {
    pub fn new(config: &FileSlackConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, ChatPostError> {
        let http_client = reqwest::Client::builder()
            .timeout(POST_TIMEOUT)
            .build()
            .map_err(|e| ChatPostError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint: format!("{}/chat.postMessage", config.api_base.trim_end_matches('/')),
            tokens,
        })
    }
}

#[async_trait]
impl ChatPoster for SlackChatPoster {
    async fn post_message(
        &self,
        group: BotGroup,
        channel: &str,
        thread_ts: &str,
        text: &str,
    ) -> Result<Option<String>, ChatPostError> {
        let token = self.tokens.get_token(group).await?;
        let body = PostMessageRequest {
            channel,
            thread_ts,
            text,
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatPostError::Transport(format!("chat.postMessage failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ChatPostError::Transport(format!(
                "chat.postMessage returned {}",
                response.status()
            )));
        }

        let parsed: PostMessageResponse = response.json().await.map_err(|e| {
            ChatPostError::Transport(format!("Failed to parse chat.postMessage response: {}", e))
        })?;

        match parsed.into_result() {
            Ok(ts) => {
                debug!(group = %group, channel, thread_ts, ts = ?ts, "Posted message");
                Ok(ts)
            }
            Err(e) => {
                warn!(group = %group, channel, "Slack rejected message: {}", e);
                Err(e)
            }
        }
    }
}
