//! JSON file session store
//!
//! One pretty-printed JSON document per session, named after the session id.
//! Bytes outside `[A-Za-z0-9._-]` are written as `%XX`, so distinct ids
//! never share a file. Writes go to a temporary file first and are renamed into place, so a
//! crash never leaves a half-written session behind.

use super::{check_version, sort_by_created, sort_by_updated};
use agora_application::ports::session_store::{SessionStore, StoreError};
use agora_domain::{DebateSession, DebateStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub struct JsonFileSessionStore {
    dir: PathBuf,
    /// Serializes read-check-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonFileSessionStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| io_error(&dir, e))?;
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(id)))
    }

    async fn read(&self, path: &Path) -> Result<Option<DebateSession>, StoreError> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(path, e)),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| StoreError::Serialization(format!("{}: {}", path.display(), e)))
    }

    async fn write(&self, session: &DebateSession) -> Result<(), StoreError> {
        let path = self.path_for(session.id());
        let tmp = path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(session)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        fs::write(&tmp, content).await.map_err(|e| io_error(&tmp, e))?;
        fs::rename(&tmp, &path).await.map_err(|e| io_error(&path, e))?;
        debug!(path = %path.display(), version = session.version(), "Session saved");
        Ok(())
    }

    /// Every readable session in the directory.
    ///
    /// Files that fail to parse are skipped with a warning.
    async fn load_all(&self) -> Result<Vec<(PathBuf, DebateSession)>, StoreError> {
        let mut entries = fs::read_dir(&self.dir)
            .await
            .map_err(|e| io_error(&self.dir, e))?;
        let mut sessions = Vec::new();

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| io_error(&self.dir, e))?
        {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            match self.read(&path).await {
                Ok(Some(session)) => sessions.push((path, session)),
                Ok(None) => {}
                Err(e) => warn!("Skipping unreadable session file: {}", e),
            }
        }

        Ok(sessions)
    }
}

fn file_stem(id: &str) -> String {
    let mut stem = String::with_capacity(id.len());
    for byte in id.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'-' | b'_') {
            stem.push(char::from(byte));
        } else {
            stem.push_str(&format!("%{byte:02X}"));
        }
    }
    stem
}

fn io_error(path: &Path, e: std::io::Error) -> StoreError {
    StoreError::Io(format!("{}: {}", path.display(), e))
}

#[async_trait]
impl SessionStore for JsonFileSessionStore {
    async fn get(&self, id: &str) -> Result<Option<DebateSession>, StoreError> {
        let path = self.path_for(id);
        match self.read(&path).await? {
            Some(session) if session.id() != id => {
                warn!(
                    path = %path.display(),
                    requested = id,
                    stored = session.id(),
                    "Session file holds a different id"
                );
                Ok(None)
            }
            found => Ok(found),
        }
    }

    async fn put(&self, session: &DebateSession) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.write(session).await
    }

    async fn put_if_version(
        &self,
        session: &DebateSession,
        expected_version: u64,
    ) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let stored = self.read(&self.path_for(session.id())).await?;
        check_version(session, stored.as_ref(), expected_version)?;
        self.write(session).await
    }

    async fn list_by_channel(&self, channel_id: &str) -> Result<Vec<DebateSession>, StoreError> {
        let mut found: Vec<_> = self
            .load_all()
            .await?
            .into_iter()
            .map(|(_, s)| s)
            .filter(|s| s.channel_id() == channel_id)
            .collect();
        sort_by_created(&mut found);
        Ok(found)
    }

    async fn list_by_status(
        &self,
        status: DebateStatus,
    ) -> Result<Vec<DebateSession>, StoreError> {
        let mut found: Vec<_> = self
            .load_all()
            .await?
            .into_iter()
            .map(|(_, s)| s)
            .filter(|s| s.status() == status)
            .collect();
        sort_by_updated(&mut found);
        Ok(found)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut purged = 0;
        for (path, session) in self.load_all().await? {
            if session.is_expired(now) {
                fs::remove_file(&path).await.map_err(|e| io_error(&path, e))?;
                debug!(id = %session.id(), "Purged expired session");
                purged += 1;
            }
        }
        Ok(purged)
    }
}
