//! Session store adapters
//!
//! - [`InMemorySessionStore`]: process-lifetime map, for tests and one-shot runs
//! - [`JsonFileSessionStore`]: one JSON document per session in a directory

mod json_file;
mod memory;

pub use json_file::JsonFileSessionStore;
pub use memory::InMemorySessionStore;

use agora_application::ports::session_store::StoreError;
use agora_domain::DebateSession;

/// Reject a write whose expected version no longer matches what is stored.
///
/// A missing record counts as version 0. A stored record under another id
/// always conflicts.
fn check_version(
    session: &DebateSession,
    stored: Option<&DebateSession>,
    expected_version: u64,
) -> Result<(), StoreError> {
    let found = stored.map_or(0, DebateSession::version);
    let same_id = stored.is_none_or(|s| s.id() == session.id());
    if same_id && found == expected_version {
        Ok(())
    } else {
        Err(StoreError::Conflict {
            id: session.id().to_string(),
            expected: expected_version,
            found,
        })
    }
}

/// Oldest first by creation time, ties broken by id
fn sort_by_created(sessions: &mut [DebateSession]) {
    sessions.sort_by(|a, b| {
        a.created_at()
            .cmp(&b.created_at())
            .then_with(|| a.id().cmp(b.id()))
    });
}

/// Least recently updated first
fn sort_by_updated(sessions: &mut [DebateSession]) {
    sessions.sort_by(|a, b| {
        a.updated_at()
            .cmp(&b.updated_at())
            .then_with(|| a.id().cmp(b.id()))
    });
}
