//! Deterministic test doubles shared by the use-case tests

use crate::ports::chat_poster::{ChatPostError, ChatPoster};
use crate::ports::model_invoker::{ModelInvocationError, ModelInvoker};
use crate::ports::session_store::{SessionStore, StoreError};
use agora_domain::{BotGroup, DebateSession, DebateStatus, GenerationParams};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::Mutex;

/// One recorded model call
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub params: GenerationParams,
}

/// Model invoker that replays canned responses in order.
///
/// Once the script runs out every call answers `"Scripted reply."`.
pub struct ScriptedInvoker {
    responses: Mutex<VecDeque<Result<String, ModelInvocationError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedInvoker {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(|r| Ok(r.into())).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::<String>::new())
    }

    /// Queue a failure as the next response
    pub fn push_error(&self, error: ModelInvocationError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn push(&self, response: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Ok(response.into()));
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ModelInvoker for ScriptedInvoker {
    async fn invoke(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ModelInvocationError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
            params: params.clone(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("Scripted reply.".to_string()))
    }
}

/// One recorded chat post
#[derive(Debug, Clone, PartialEq)]
pub struct PostedMessage {
    pub group: BotGroup,
    pub channel: String,
    pub thread_ts: String,
    pub text: String,
}

/// Chat poster that records every post and hands out sequential ids
#[derive(Default)]
pub struct RecordingPoster {
    posted: Mutex<Vec<PostedMessage>>,
    fail_next: Mutex<bool>,
}

impl RecordingPoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next(&self) {
        *self.fail_next.lock().unwrap() = true;
    }

    pub fn posted(&self) -> Vec<PostedMessage> {
        self.posted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatPoster for RecordingPoster {
    async fn post_message(
        &self,
        group: BotGroup,
        channel: &str,
        thread_ts: &str,
        text: &str,
    ) -> Result<Option<String>, ChatPostError> {
        let mut fail = self.fail_next.lock().unwrap();
        if *fail {
            *fail = false;
            return Err(ChatPostError::Transport("connection reset".to_string()));
        }
        let mut posted = self.posted.lock().unwrap();
        posted.push(PostedMessage {
            group,
            channel: channel.to_string(),
            thread_ts: thread_ts.to_string(),
            text: text.to_string(),
        });
        Ok(Some(format!("1700000001.{:06}", posted.len())))
    }
}

/// Session store backed by a map, with the same version check as the real
/// stores
#[derive(Default)]
pub struct MemoryStore {
    sessions: Mutex<std::collections::HashMap<String, DebateSession>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self, id: &str) -> Option<DebateSession> {
        self.sessions.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn get(&self, id: &str) -> Result<Option<DebateSession>, StoreError> {
        Ok(self.snapshot(id))
    }

    async fn put(&self, session: &DebateSession) -> Result<(), StoreError> {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.id().to_string(), session.clone());
        Ok(())
    }

    async fn put_if_version(
        &self,
        session: &DebateSession,
        expected_version: u64,
    ) -> Result<(), StoreError> {
        let mut sessions = self.sessions.lock().unwrap();
        let found = sessions.get(session.id()).map_or(0, |s| s.version());
        if found != expected_version {
            return Err(StoreError::Conflict {
                id: session.id().to_string(),
                expected: expected_version,
                found,
            });
        }
        sessions.insert(session.id().to_string(), session.clone());
        Ok(())
    }

    async fn list_by_channel(&self, channel_id: &str) -> Result<Vec<DebateSession>, StoreError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .values()
            .filter(|s| s.channel_id() == channel_id)
            .cloned()
            .collect())
    }

    async fn list_by_status(
        &self,
        status: DebateStatus,
    ) -> Result<Vec<DebateSession>, StoreError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .values()
            .filter(|s| s.status() == status)
            .cloned()
            .collect())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, StoreError> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now));
        Ok(before - sessions.len())
    }
}
