//! Session entity - a saved snapshot of a worksheet.
//!
//! Sessions are what the history list holds. Each save creates a fresh
//! session with a new identifier; there is no in-place update.

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::worksheet::{QuadrantRecord, Worksheet};
use serde::{Deserialize, Serialize};

/// A timestamped, identified worksheet snapshot.
///
/// # Invariants
///
/// - `theme` has non-whitespace content (enforced by [`Session::capture`])
/// - `id` is unique per save
///
/// Field names follow the persisted blob format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    id: SessionId,
    timestamp: Timestamp,
    theme: String,
    data: QuadrantRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ai_analysis: Option<String>,
}

impl Session {
    /// Snapshots a worksheet.
    ///
    /// Returns `None` when the worksheet has no theme yet.
    pub fn capture(worksheet: &Worksheet, id: SessionId, timestamp: Timestamp) -> Option<Self> {
        if !worksheet.has_theme() {
            return None;
        }
        Some(Self {
            id,
            timestamp,
            theme: worksheet.theme.clone(),
            data: worksheet.record.clone(),
            ai_analysis: worksheet.analysis.clone(),
        })
    }

    /// Reconstitute a session from persistence (no validation).
    pub fn reconstitute(
        id: SessionId,
        timestamp: Timestamp,
        theme: String,
        data: QuadrantRecord,
        ai_analysis: Option<String>,
    ) -> Self {
        Self {
            id,
            timestamp,
            theme,
            data,
            ai_analysis,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn data(&self) -> &QuadrantRecord {
        &self.data
    }

    pub fn ai_analysis(&self) -> Option<&str> {
        self.ai_analysis.as_deref()
    }

    /// One-line preview for history listings (first line of keep-pros).
    pub fn preview(&self) -> &str {
        self.data.keep_pros.lines().next().unwrap_or("")
    }

    /// Restores the worksheet this session was captured from.
    pub fn to_worksheet(&self) -> Worksheet {
        Worksheet {
            theme: self.theme.clone(),
            record: self.data.clone(),
            analysis: self.ai_analysis.clone(),
        }
    }
}
