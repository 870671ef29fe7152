//! Start Debate use case
//!
//! Creates a fresh session in `initializing` status and stores it. The
//! host's welcome is the first turn, taken separately.

use crate::config::DebateConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::session_store::{SessionStore, StoreError};
use agora_domain::{DebateSession, DomainError};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum StartDebateError {
    #[error("A debate with id {0} already exists")]
    AlreadyExists(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Session store error: {0}")]
    Store(#[from] StoreError),
}

/// Input for the StartDebate use case
#[derive(Debug, Clone)]
pub struct StartDebateInput {
    /// Chat thread id the debate lives in
    pub debate_id: String,
    pub channel_id: String,
    pub proposition: String,
    /// Overrides the configured round ceiling
    pub max_rounds: Option<u32>,
}

impl StartDebateInput {
    pub fn new(
        debate_id: impl Into<String>,
        channel_id: impl Into<String>,
        proposition: impl Into<String>,
    ) -> Self {
        Self {
            debate_id: debate_id.into(),
            channel_id: channel_id.into(),
            proposition: proposition.into(),
            max_rounds: None,
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }
}

pub struct StartDebateUseCase {
    store: Arc<dyn SessionStore>,
    config: DebateConfig,
    logger: Arc<dyn ConversationLogger>,
}

impl StartDebateUseCase {
    pub fn new(store: Arc<dyn SessionStore>, config: DebateConfig) -> Self {
        Self {
            store,
            config,
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub async fn execute(&self, input: StartDebateInput) -> Result<DebateSession, StartDebateError> {
        let rules = self.config.rules();
        let session = DebateSession::new(
            input.debate_id,
            input.channel_id,
            input.proposition,
            input.max_rounds.unwrap_or(rules.max_rounds),
            rules.session_ttl(),
            Utc::now(),
        )?;

        // A missing record counts as version 0, so this only succeeds once.
        match self.store.put_if_version(&session, 0).await {
            Ok(()) => {}
            Err(StoreError::Conflict { id, .. }) => return Err(StartDebateError::AlreadyExists(id)),
            Err(e) => return Err(e.into()),
        }

        info!(
            debate_id = %session.id(),
            channel_id = %session.channel_id(),
            max_rounds = session.max_rounds(),
            "Debate started"
        );
        self.logger.log(ConversationEvent::new(
            "debate_started",
            json!({
                "debate_id": session.id(),
                "channel_id": session.channel_id(),
                "proposition": session.proposition(),
                "max_rounds": session.max_rounds(),
                "expires_at": session.expires_at().to_rfc3339(),
            }),
        ));

        Ok(session)
    }
}
