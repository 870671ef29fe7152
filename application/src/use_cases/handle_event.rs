//! Handle Event use case
//!
//! Turns an inbound chat-platform event envelope into a started debate.
//! Verification challenges are echoed back; everything that is not a
//! `debate: <proposition>` mention from a human is ignored.

use super::start_debate::{StartDebateError, StartDebateInput, StartDebateUseCase};
use agora_domain::DebateSession;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};
use tracing::{debug, info};

static DEBATE_COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)debate:\s*(.+)").expect("debate command pattern is valid"));

/// Event envelope as delivered by the chat platform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<ChatEvent>,
}

/// The inner event of an `event_callback` envelope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub thread_ts: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    /// Set when a bot, including our own personas, posted the message
    #[serde(default)]
    pub bot_id: Option<String>,
}

impl ChatEvent {
    /// Thread the debate lives in: the enclosing thread, or the message itself
    pub fn thread_id(&self) -> Option<&str> {
        self.thread_ts.as_deref().or(self.ts.as_deref())
    }
}

/// What the handler did with an envelope
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// Verification challenge, to be echoed verbatim
    Challenge(String),
    DebateStarted(DebateSession),
    Ignored(&'static str),
}

/// Extract the proposition from a `debate: ...` command
pub fn parse_debate_command(text: &str) -> Option<String> {
    DEBATE_COMMAND
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|p| !p.is_empty())
}

pub struct HandleEventUseCase {
    start_debate: Arc<StartDebateUseCase>,
}

impl HandleEventUseCase {
    pub fn new(start_debate: Arc<StartDebateUseCase>) -> Self {
        Self { start_debate }
    }

    pub async fn execute(&self, envelope: EventEnvelope) -> Result<EventOutcome, StartDebateError> {
        if let Some(challenge) = envelope.challenge {
            debug!("Answering verification challenge");
            return Ok(EventOutcome::Challenge(challenge));
        }

        if envelope.kind.as_deref() != Some("event_callback") {
            return Ok(EventOutcome::Ignored("not an event callback"));
        }
        let Some(event) = envelope.event else {
            return Ok(EventOutcome::Ignored("no event"));
        };
        if event.kind != "app_mention" {
            return Ok(EventOutcome::Ignored("not a mention"));
        }
        if event.bot_id.is_some() {
            return Ok(EventOutcome::Ignored("posted by a bot"));
        }

        let Some(proposition) = event.text.as_deref().and_then(parse_debate_command) else {
            return Ok(EventOutcome::Ignored("no debate command"));
        };
        let (Some(channel), Some(thread)) = (event.channel.as_deref(), event.thread_id()) else {
            return Ok(EventOutcome::Ignored("missing channel or timestamp"));
        };

        info!(channel, thread, user = ?event.user, "Debate requested");
        let session = self
            .start_debate
            .execute(StartDebateInput::new(thread, channel, proposition))
            .await?;
        Ok(EventOutcome::DebateStarted(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DebateConfig;
    use crate::testing::MemoryStore;
    use serde_json::json;

    fn use_case() -> (HandleEventUseCase, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let start = Arc::new(StartDebateUseCase::new(store.clone(), DebateConfig::default()));
        (HandleEventUseCase::new(start), store)
    }

    fn mention(text: &str) -> EventEnvelope {
        serde_json::from_value(json!({
            "type": "event_callback",
            "event": {
                "type": "app_mention",
                "text": text,
                "channel": "C123",
                "ts": "1700000000.000100",
                "user": "U1"
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_debate_command() {
        assert_eq!(
            parse_debate_command("<@U0BOT> Debate:  Remote work improves productivity "),
            Some("Remote work improves productivity".to_string())
        );
        assert_eq!(parse_debate_command("DEBATE:tea"), Some("tea".to_string()));
        assert_eq!(parse_debate_command("debate:   "), None);
        assert_eq!(parse_debate_command("let's talk"), None);
    }

    #[tokio::test]
    async fn test_challenge_is_echoed() {
        let (use_case, _) = use_case();
        let envelope: EventEnvelope = serde_json::from_value(json!({
            "type": "url_verification",
            "challenge": "3eZbrw1aBm2rZgRNFdxV2595E9CY3gmdALWMmHkvFXO7tYXAYM8P"
        }))
        .unwrap();

        let outcome = use_case.execute(envelope).await.unwrap();
        assert_eq!(
            outcome,
            EventOutcome::Challenge("3eZbrw1aBm2rZgRNFdxV2595E9CY3gmdALWMmHkvFXO7tYXAYM8P".into())
        );
    }

    #[tokio::test]
    async fn test_mention_starts_debate_keyed_by_ts() {
        let (use_case, store) = use_case();

        let outcome = use_case
            .execute(mention("<@U0BOT> debate: Remote work improves productivity"))
            .await
            .unwrap();

        let EventOutcome::DebateStarted(session) = outcome else {
            panic!("expected a started debate, got {outcome:?}");
        };
        assert_eq!(session.id(), "1700000000.000100");
        assert_eq!(session.channel_id(), "C123");
        assert_eq!(session.proposition(), "Remote work improves productivity");
        assert!(store.snapshot("1700000000.000100").is_some());
    }

    #[tokio::test]
    async fn test_mention_in_thread_uses_thread_ts() {
        let (use_case, _) = use_case();
        let mut envelope = mention("debate: Tea beats coffee");
        if let Some(event) = envelope.event.as_mut() {
            event.thread_ts = Some("1699999999.000001".to_string());
        }

        let outcome = use_case.execute(envelope).await.unwrap();
        assert!(matches!(outcome, EventOutcome::DebateStarted(s) if s.id() == "1699999999.000001"));
    }

    #[tokio::test]
    async fn test_bot_messages_and_chatter_are_ignored() {
        let (use_case, store) = use_case();

        let mut from_bot = mention("debate: Tea beats coffee");
        if let Some(event) = from_bot.event.as_mut() {
            event.bot_id = Some("B1".to_string());
        }
        assert_eq!(
            use_case.execute(from_bot).await.unwrap(),
            EventOutcome::Ignored("posted by a bot")
        );
        assert_eq!(
            use_case.execute(mention("hello there")).await.unwrap(),
            EventOutcome::Ignored("no debate command")
        );
        assert_eq!(
            use_case.execute(EventEnvelope::default()).await.unwrap(),
            EventOutcome::Ignored("not an event callback")
        );
        assert!(store.snapshot("1700000000.000100").is_none());
    }
}
