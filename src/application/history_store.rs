//! SessionHistoryStore - Session history backed by a key-value store.
//!
//! The whole history is one JSON array under a fixed key, read once at
//! startup and rewritten after every commit.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::session::{History, Session};
use crate::domain::worksheet::Worksheet;
use crate::ports::{KeyValueStore, StoreError};

/// Storage key holding the serialized history.
pub const HISTORY_STORAGE_KEY: &str = "conflict_mgmt_sessions";

/// In-memory history mirrored to a [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionHistoryStore {
    store: Arc<dyn KeyValueStore>,
    history: History,
}

impl std::fmt::Debug for SessionHistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHistoryStore")
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

impl SessionHistoryStore {
    /// Load the history from the store.
    ///
    /// A missing, unreadable or corrupt blob yields an empty history.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let history = match store.get(HISTORY_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Session>>(&raw) {
                Ok(entries) => {
                    debug!(entries = entries.len(), "loaded session history");
                    History::from_entries(entries)
                }
                Err(e) => {
                    warn!(error = %e, "stored session history is corrupt; starting empty");
                    History::new()
                }
            },
            Ok(None) => History::new(),
            Err(e) => {
                warn!(error = %e, "failed to read session history; starting empty");
                History::new()
            }
        };

        Self { store, history }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    /// Commit the worksheet as a new history entry stamped with the current time.
    ///
    /// See [`save_draft_at`](Self::save_draft_at).
    pub fn save_draft(&mut self, worksheet: &Worksheet) -> Result<Option<Session>, StoreError> {
        self.save_draft_at(worksheet, Timestamp::now())
    }

    /// Commit the worksheet as a new history entry at `now`.
    ///
    /// Returns `Ok(None)` without touching anything when the theme is blank.
    /// The in-memory history is updated even if persisting it fails.
    pub fn save_draft_at(
        &mut self,
        worksheet: &Worksheet,
        now: Timestamp,
    ) -> Result<Option<Session>, StoreError> {
        let Some(session) = Session::capture(worksheet, SessionId::new(), now) else {
            debug!("skipping save of worksheet without a theme");
            return Ok(None);
        };

        let saved = self.history.record(session).clone();
        info!(
            session_id = %saved.id(),
            entries = self.history.len(),
            "session committed to history"
        );

        self.persist()?;
        Ok(Some(saved))
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(self.history.entries())
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;

        self.store.set(HISTORY_STORAGE_KEY, &json).map_err(|e| {
            warn!(error = %e, "failed to persist session history");
            e
        })
    }
}
