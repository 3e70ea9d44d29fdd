//! Bounded, newest-first session history.

use crate::domain::foundation::Timestamp;

use super::Session;

/// Maximum number of sessions kept.
pub const MAX_HISTORY_ENTRIES: usize = 20;

/// Window within which a save supersedes an earlier save of the same theme.
pub const SUPERSEDE_WINDOW_MILLIS: i64 = 3_600_000;

/// Ordered history of saved sessions, newest first.
///
/// # Invariants
///
/// - at most [`MAX_HISTORY_ENTRIES`] entries
/// - recording a session drops every same-theme entry saved within
///   [`SUPERSEDE_WINDOW_MILLIS`] of it, so rapid re-saves collapse into one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<Session>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from stored entries, enforcing the size cap.
    pub fn from_entries(mut entries: Vec<Session>) -> Self {
        entries.truncate(MAX_HISTORY_ENTRIES);
        Self { entries }
    }

    pub fn entries(&self) -> &[Session] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent session, if any.
    pub fn latest(&self) -> Option<&Session> {
        self.entries.first()
    }

    /// Records a new session at the front.
    ///
    /// The session's own timestamp is "now" for the supersede rule.
    pub fn record(&mut self, session: Session) -> &Session {
        let now = session.timestamp();
        self.entries
            .retain(|existing| !supersedes(&session, existing, now));
        self.entries.insert(0, session);
        self.entries.truncate(MAX_HISTORY_ENTRIES);
        &self.entries[0]
    }
}

fn supersedes(new: &Session, existing: &Session, now: Timestamp) -> bool {
    existing.theme() == new.theme()
        && now.millis_since(&existing.timestamp()) <= SUPERSEDE_WINDOW_MILLIS
}
