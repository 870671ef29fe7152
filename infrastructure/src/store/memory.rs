//! In-memory session store

use super::{check_version, sort_by_created, sort_by_updated};
use agora_application::ports::session_store::{SessionStore, StoreError};
use agora_domain::{DebateSession, DebateStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Sessions held in a map for the lifetime of the process
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, DebateSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, id: &str) -> Result<Option<DebateSession>, StoreError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn put(&self, session: &DebateSession) -> Result<(), StoreError> {
        self.sessions
            .write()
            .await
            .insert(session.id().to_string(), session.clone());
        Ok(())
    }

    async fn put_if_version(
        &self,
        session: &DebateSession,
        expected_version: u64,
    ) -> Result<(), StoreError> {
        let mut sessions = self.sessions.write().await;
        check_version(session, sessions.get(session.id()), expected_version)?;
        sessions.insert(session.id().to_string(), session.clone());
        debug!(id = %session.id(), version = session.version(), "Session saved");
        Ok(())
    }

    async fn list_by_channel(&self, channel_id: &str) -> Result<Vec<DebateSession>, StoreError> {
        let mut found: Vec<_> = self
            .sessions
            .read()
            .await
            .values()
            .filter(|s| s.channel_id() == channel_id)
            .cloned()
            .collect();
        sort_by_created(&mut found);
        Ok(found)
    }

    async fn list_by_status(
        &self,
        status: DebateStatus,
    ) -> Result<Vec<DebateSession>, StoreError> {
        let mut found: Vec<_> = self
            .sessions
            .read()
            .await
            .values()
            .filter(|s| s.status() == status)
            .cloned()
            .collect();
        sort_by_updated(&mut found);
        Ok(found)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, StoreError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now));
        Ok(before - sessions.len())
    }
}
