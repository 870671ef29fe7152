//! Take Turn use case
//!
//! Drives exactly one turn of a stored debate: load the session, derive the
//! action from its status, route the payload, apply the utterance, post it
//! to the chat surface and write the session back conditionally.
//!
//! Nothing is saved until the post has succeeded, so a failed turn leaves
//! the stored session exactly as it was and can simply be retried.

use super::orchestrator::OrchestratorError;
use super::router::{InvocationPayload, InvocationRouter};
use crate::ports::chat_poster::{ChatPostError, ChatPoster};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{DebateProgressNotifier, NoProgress};
use crate::ports::session_store::{SessionStore, StoreError};
use agora_domain::{
    Action, AgentResponse, DebateMessage, DebateSession, DebateStatus, DomainError, Persona,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while taking a turn
#[derive(Error, Debug)]
pub enum TurnError {
    #[error("Debate {0} not found")]
    NotFound(String),

    #[error("Debate {0} has expired")]
    Expired(String),

    #[error("Debate {0} is already completed")]
    Completed(String),

    #[error(transparent)]
    Orchestrator(#[from] OrchestratorError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Session store error: {0}")]
    Store(#[from] StoreError),

    #[error("Posting to chat failed: {0}")]
    Post(#[from] ChatPostError),
}

impl TurnError {
    /// Another writer got there first; reload and try again
    pub fn is_conflict(&self) -> bool {
        matches!(self, TurnError::Store(e) if e.is_conflict())
    }
}

/// Result of one successful turn
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub action: Action,
    pub response: AgentResponse,
    /// The message as recorded, including its chat id when posted
    pub message: DebateMessage,
    pub previous_status: DebateStatus,
    /// The session as saved
    pub session: DebateSession,
}

impl TurnOutcome {
    pub fn status_changed(&self) -> bool {
        self.previous_status != self.session.status()
    }

    pub fn is_complete(&self) -> bool {
        self.session.status().is_terminal()
    }
}

pub struct TakeTurnUseCase {
    router: Arc<InvocationRouter>,
    store: Arc<dyn SessionStore>,
    poster: Arc<dyn ChatPoster>,
    logger: Arc<dyn ConversationLogger>,
}

impl TakeTurnUseCase {
    pub fn new(
        router: Arc<InvocationRouter>,
        store: Arc<dyn SessionStore>,
        poster: Arc<dyn ChatPoster>,
    ) -> Self {
        Self {
            router,
            store,
            poster,
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub async fn execute(&self, debate_id: &str) -> Result<TurnOutcome, TurnError> {
        self.execute_with_progress(debate_id, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        debate_id: &str,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<TurnOutcome, TurnError> {
        let session = self
            .store
            .get(debate_id)
            .await?
            .ok_or_else(|| TurnError::NotFound(debate_id.to_string()))?;

        let now = Utc::now();
        if session.is_expired(now) {
            return Err(TurnError::Expired(debate_id.to_string()));
        }
        let action = session
            .next_action()
            .ok_or_else(|| TurnError::Completed(debate_id.to_string()))?;

        progress.on_turn_start(action, debate_id);
        match self.take(session, action, progress).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                warn!(debate_id, %action, error = %e, "Turn failed, session left unchanged");
                progress.on_turn_failed(action, &e.to_string());
                Err(e)
            }
        }
    }

    async fn take(
        &self,
        session: DebateSession,
        action: Action,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<TurnOutcome, TurnError> {
        let payload = InvocationPayload::for_session(&session, action);
        let response = self.router.route(&payload).await?;

        let expected_version = session.version();
        let previous_status = session.status();
        let mut next = session;
        let mut message = next.record_turn(&response, Utc::now())?.clone();
        let sequence = message.sequence;

        let text = chat_text(&response);
        let chat_ts = self
            .poster
            .post_message(
                response.persona.bot_group(),
                next.channel_id(),
                next.id(),
                &text,
            )
            .await?;
        if let Some(ts) = chat_ts {
            next.mark_posted(sequence, ts.clone());
            message.chat_ts = Some(ts);
        }

        self.store.put_if_version(&next, expected_version).await?;

        info!(
            debate_id = %next.id(),
            persona = %response.persona,
            sequence,
            round = next.current_round(),
            status = %next.status(),
            "Turn recorded"
        );
        self.logger.log(ConversationEvent::new(
            "turn",
            json!({
                "debate_id": next.id(),
                "action": action.as_str(),
                "sequence": sequence,
                "persona": response.persona.as_str(),
                "name": response.name,
                "content": response.content,
                "word_count": response.metadata.word_count,
                "round": next.current_round(),
            }),
        ));

        let speaker = self.router.orchestrator().roster().get(response.persona);
        progress.on_turn_complete(speaker, &response);
        if previous_status != next.status() {
            self.logger.log(ConversationEvent::new(
                "status_change",
                json!({
                    "debate_id": next.id(),
                    "from": previous_status.as_str(),
                    "to": next.status().as_str(),
                }),
            ));
            progress.on_status_change(previous_status, next.status());
        }

        Ok(TurnOutcome {
            action,
            response,
            message,
            previous_status,
            session: next,
        })
    }
}

/// Text as posted to chat.
///
/// The fact-checker and summariser share the host's bot, so their posts
/// carry the speaker's name.
pub fn chat_text(response: &AgentResponse) -> String {
    match response.persona {
        Persona::FactChecker | Persona::Summariser => {
            format!("*{}*\n{}", response.name, response.content)
        }
        _ => response.content.clone(),
    }
}
