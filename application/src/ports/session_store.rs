//! Session store port
//!
//! Durable storage for debate sessions. The store exclusively owns the
//! session record; use cases read a snapshot, derive the next one, and
//! write it back conditionally.

use agora_domain::{DebateSession, DebateStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur during session store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Version conflict on session {id}: expected {expected}, found {found}")]
    Conflict { id: String, expected: u64, found: u64 },

    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict { .. })
    }
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load a session by id
    async fn get(&self, id: &str) -> Result<Option<DebateSession>, StoreError>;

    /// Unconditional, idempotent upsert
    async fn put(&self, session: &DebateSession) -> Result<(), StoreError>;

    /// Write `session` only if the stored copy is still at `expected_version`.
    ///
    /// A missing record counts as version 0.
    async fn put_if_version(
        &self,
        session: &DebateSession,
        expected_version: u64,
    ) -> Result<(), StoreError>;

    /// Sessions in a channel, oldest first
    async fn list_by_channel(&self, channel_id: &str) -> Result<Vec<DebateSession>, StoreError>;

    /// Sessions with the given status, least recently updated first
    async fn list_by_status(&self, status: DebateStatus)
    -> Result<Vec<DebateSession>, StoreError>;

    /// Remove sessions whose expiry has passed, returning how many were removed
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, StoreError>;
}
