//! Bot tokens from environment variables
//!
//! Which variable holds which bot's token comes from the `[slack]` config
//! section. Each token is looked up once and cached for the process lifetime.

use crate::config::FileSlackConfig;
use agora_application::ports::token_store::{TokenStore, TokenStoreError};
use agora_domain::BotGroup;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

pub struct EnvTokenStore {
    config: FileSlackConfig,
    lookup: Lookup,
    cache: Mutex<HashMap<BotGroup, String>>,
}

impl EnvTokenStore {
    pub fn new(config: FileSlackConfig) -> Self {
        Self::with_lookup(config, |name| std::env::var(name).ok())
    }

    /// Resolve variable names through `lookup` instead of the process environment.
    pub fn with_lookup(
        config: FileSlackConfig,
        lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            config,
            lookup: Box::new(lookup),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Bot groups whose variable is unset or blank.
    pub fn missing_groups(&self) -> Vec<BotGroup> {
        [BotGroup::Orchestrator, BotGroup::DebaterA, BotGroup::DebaterB]
            .into_iter()
            .filter(|group| self.read(*group).is_none())
            .collect()
    }

    fn read(&self, group: BotGroup) -> Option<String> {
        (self.lookup)(self.config.token_env(group))
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }
}

#[async_trait]
impl TokenStore for EnvTokenStore {
    async fn get_token(&self, group: BotGroup) -> Result<String, TokenStoreError> {
        let mut cache = self
            .cache
            .lock()
            .map_err(|e| TokenStoreError::Lookup(e.to_string()))?;

        if let Some(token) = cache.get(&group) {
            return Ok(token.clone());
        }

        let token = self.read(group).ok_or(TokenStoreError::Missing(group))?;
        debug!(
            group = %group,
            var = self.config.token_env(group),
            "Loaded bot token"
        );
        cache.insert(group, token.clone());
        Ok(token)
    }
}
