//! WizardController - The stateful driver of the worksheet flow.
//!
//! Owns the current stage, the worksheet being written, the session history
//! and the transient UI flags (history overlay, in-flight AI requests, the
//! review edit buffer). All mutation of worksheet state goes through here.
//!
//! AI operations are split into `begin_*` / `finish_*` pairs so a host can
//! drive the provider call itself; `request_*` composes the pair for the
//! common case.

use chrono::{NaiveDate, Utc};
use thiserror::Error;
use tracing::{debug, info};

use super::ai_bridge::{AiBridge, BridgeOutcome, FallbackReason};
use super::history_store::SessionHistoryStore;
use crate::domain::session::{History, Session};
use crate::domain::wizard::{StageMode, WizardStage};
use crate::domain::worksheet::{
    parse_import, CsvExport, ImportError, Quadrant, QuadrantRecord, StageDescriptor, Worksheet,
};
use crate::ports::StoreError;

/// Notice shown when a draft could not be generated.
pub const DRAFT_FAILED_MESSAGE: &str = "Failed to generate a draft.";

/// Precondition violations and persistence failures from the controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("operation requires stage {expected}, current stage is {actual}")]
    NotAtStage {
        expected: WizardStage,
        actual: WizardStage,
    },

    #[error("theme is empty")]
    EmptyTheme,

    #[error("a draft request is already in flight")]
    DraftInFlight,

    #[error("an analysis request is already in flight")]
    AnalysisInFlight,

    #[error("no review edit is in progress")]
    NotEditing,

    #[error("no draft request is pending")]
    DraftNotPending,

    #[error("no analysis request is pending")]
    AnalysisNotPending,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What happened to a finished draft request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftNotice {
    /// The draft replaced the record and the wizard moved to the first quadrant.
    Applied,
    /// Nothing changed.
    Failed(FallbackReason),
}

impl DraftNotice {
    /// Text to show the user, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            DraftNotice::Applied => None,
            DraftNotice::Failed(_) => Some(DRAFT_FAILED_MESSAGE),
        }
    }
}

/// Stateful controller for one worksheet session.
#[derive(Debug)]
pub struct WizardController {
    stage: WizardStage,
    worksheet: Worksheet,
    history: SessionHistoryStore,
    history_view: bool,
    drafting: bool,
    analyzing: bool,
    edit_buffer: Option<QuadrantRecord>,
}

impl WizardController {
    /// Creates a controller at `Intro` with an empty worksheet.
    pub fn new(history: SessionHistoryStore) -> Self {
        Self {
            stage: WizardStage::Intro,
            worksheet: Worksheet::new(),
            history,
            history_view: false,
            drafting: false,
            analyzing: false,
            edit_buffer: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn stage(&self) -> WizardStage {
        self.stage
    }

    pub fn worksheet(&self) -> &Worksheet {
        &self.worksheet
    }

    pub fn history(&self) -> &History {
        self.history.history()
    }

    /// True when the intro screen should offer the history list.
    pub fn has_history(&self) -> bool {
        self.history.has_history()
    }

    pub fn is_history_view(&self) -> bool {
        self.history_view
    }

    pub fn is_drafting(&self) -> bool {
        self.drafting
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    /// The in-progress review edit, if any.
    pub fn edit_buffer(&self) -> Option<&QuadrantRecord> {
        self.edit_buffer.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.edit_buffer.is_some()
    }

    /// Header badge for the current stage.
    pub fn stage_mode(&self) -> Option<StageMode> {
        self.stage.mode()
    }

    /// Title, prompt and accent for the current quadrant stage.
    pub fn current_descriptor(&self) -> Option<&'static StageDescriptor> {
        self.stage.descriptor()
    }

    /// Whether `advance` would move forward.
    pub fn can_advance(&self) -> bool {
        match self.stage {
            WizardStage::ThemeInput => self.worksheet.has_theme() && !self.drafting,
            other => other.next().is_some(),
        }
    }

    /// Whether `begin_draft` would succeed.
    pub fn can_request_draft(&self) -> bool {
        self.stage == WizardStage::ThemeInput && self.worksheet.has_theme() && !self.drafting
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    fn set_stage(&mut self, stage: WizardStage) {
        if stage != self.stage {
            debug!(from = %self.stage, to = %stage, "stage changed");
            self.edit_buffer = None;
        }
        self.stage = stage;
    }

    /// Begin a fresh worksheet at the theme stage.
    pub fn start(&mut self) {
        self.worksheet.clear();
        self.history_view = false;
        self.edit_buffer = None;
        self.set_stage(WizardStage::ThemeInput);
    }

    /// Move one stage forward if allowed; returns the resulting stage.
    pub fn advance(&mut self) -> WizardStage {
        if self.can_advance() {
            if let Some(next) = self.stage.next() {
                self.set_stage(next);
            }
        }
        self.stage
    }

    /// Move one stage back; returns the resulting stage.
    pub fn retreat(&mut self) -> WizardStage {
        if let Some(previous) = self.stage.previous() {
            self.set_stage(previous);
        }
        self.stage
    }

    /// Return to the intro screen, keeping the worksheet until the next `start`.
    pub fn go_to_intro(&mut self) {
        self.set_stage(WizardStage::Intro);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the theme; ignored while a draft is being generated.
    pub fn set_theme(&mut self, text: impl Into<String>) {
        if self.drafting {
            return;
        }
        self.worksheet.theme = text.into();
    }

    pub fn update_quadrant(&mut self, quadrant: Quadrant, text: impl Into<String>) {
        self.worksheet.record.set(quadrant, text);
    }

    /// Write the quadrant bound to the current stage.
    ///
    /// Returns false (and does nothing) outside the quadrant stages.
    pub fn update_current_quadrant(&mut self, text: impl Into<String>) -> bool {
        match self.stage.quadrant() {
            Some(quadrant) => {
                self.update_quadrant(quadrant, text);
                true
            }
            None => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // History
    // ─────────────────────────────────────────────────────────────────────────

    pub fn show_history(&mut self) {
        self.history_view = true;
    }

    pub fn hide_history(&mut self) {
        self.history_view = false;
    }

    /// Open a saved session in review.
    pub fn load_session(&mut self, session: &Session) {
        self.worksheet = session.to_worksheet();
        self.history_view = false;
        self.edit_buffer = None;
        self.set_stage(WizardStage::Review);
        debug!(session_id = %session.id(), "session loaded");
    }

    /// Commit the current worksheet to history.
    pub fn save_draft(&mut self) -> Result<Option<Session>, StoreError> {
        self.history.save_draft(&self.worksheet)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // CSV
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the worksheet with an imported CSV row and open it in review.
    ///
    /// On error nothing changes.
    pub fn import_csv(&mut self, raw: &str) -> Result<(), ImportError> {
        let row = parse_import(raw)?;
        info!(theme = %row.theme, "worksheet imported from CSV");

        self.worksheet = row.into_worksheet();
        self.history_view = false;
        self.edit_buffer = None;
        self.set_stage(WizardStage::Review);
        Ok(())
    }

    /// Export the current worksheet, dated today (UTC).
    pub fn export_csv(&self) -> CsvExport {
        self.export_csv_on(Utc::now().date_naive())
    }

    pub fn export_csv_on(&self, date: NaiveDate) -> CsvExport {
        CsvExport::for_worksheet(&self.worksheet, date)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Review edit mode
    // ─────────────────────────────────────────────────────────────────────────

    fn require_stage(&self, expected: WizardStage) -> Result<(), WizardError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(WizardError::NotAtStage {
                expected,
                actual: self.stage,
            })
        }
    }

    /// Start editing the quadrants in review.
    pub fn begin_edit(&mut self) -> Result<(), WizardError> {
        self.require_stage(WizardStage::Review)?;
        self.edit_buffer = Some(self.worksheet.record.clone());
        Ok(())
    }

    /// Change one quadrant in the edit buffer.
    pub fn edit_quadrant(
        &mut self,
        quadrant: Quadrant,
        text: impl Into<String>,
    ) -> Result<(), WizardError> {
        let buffer = self.edit_buffer.as_mut().ok_or(WizardError::NotEditing)?;
        buffer.set(quadrant, text);
        Ok(())
    }

    /// Discard the edit buffer.
    pub fn cancel_edit(&mut self) {
        self.edit_buffer = None;
    }

    /// Apply the edit buffer and save the session.
    pub fn commit_edit(&mut self) -> Result<Option<Session>, WizardError> {
        let record = self.edit_buffer.take().ok_or(WizardError::NotEditing)?;
        self.worksheet.record = record;
        Ok(self.save_draft()?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // AI draft
    // ─────────────────────────────────────────────────────────────────────────

    /// Mark a draft request as in flight and return the theme to send.
    pub fn begin_draft(&mut self) -> Result<String, WizardError> {
        self.require_stage(WizardStage::ThemeInput)?;
        if self.drafting {
            return Err(WizardError::DraftInFlight);
        }
        if !self.worksheet.has_theme() {
            return Err(WizardError::EmptyTheme);
        }

        self.drafting = true;
        Ok(self.worksheet.theme.clone())
    }

    /// Apply the result of a draft request.
    ///
    /// A generated record replaces the current one and moves the wizard to
    /// the first quadrant; a fallback leaves everything as it was.
    pub fn finish_draft(
        &mut self,
        outcome: BridgeOutcome<QuadrantRecord>,
    ) -> Result<DraftNotice, WizardError> {
        if !self.drafting {
            return Err(WizardError::DraftNotPending);
        }
        self.drafting = false;

        match outcome {
            BridgeOutcome::Generated(record) => {
                self.worksheet.record = record;
                self.set_stage(WizardStage::Quadrant1);
                Ok(DraftNotice::Applied)
            }
            BridgeOutcome::Fallback(reason) => {
                debug!(?reason, "draft not applied");
                Ok(DraftNotice::Failed(reason))
            }
        }
    }

    /// Request a draft through `bridge` and apply it.
    pub async fn request_draft(&mut self, bridge: &AiBridge) -> Result<DraftNotice, WizardError> {
        let theme = self.begin_draft()?;
        let outcome = bridge.draft(&theme).await;
        self.finish_draft(outcome)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // AI analysis
    // ─────────────────────────────────────────────────────────────────────────

    /// Mark an analysis request as in flight and return what to analyze.
    pub fn begin_analysis(&mut self) -> Result<(String, QuadrantRecord), WizardError> {
        if self.analyzing {
            return Err(WizardError::AnalysisInFlight);
        }

        self.analyzing = true;
        Ok((self.worksheet.theme.clone(), self.worksheet.record.clone()))
    }

    /// Store the analysis (or its fallback message) and save the session.
    ///
    /// The analysis stays on the worksheet even if saving fails.
    pub fn finish_analysis(
        &mut self,
        outcome: BridgeOutcome<String>,
    ) -> Result<Option<Session>, WizardError> {
        if !self.analyzing {
            return Err(WizardError::AnalysisNotPending);
        }
        self.analyzing = false;

        self.worksheet.analysis = Some(outcome.into_text());
        Ok(self.save_draft()?)
    }

    /// Request an analysis through `bridge`, store it and save the session.
    pub async fn request_analysis(
        &mut self,
        bridge: &AiBridge,
    ) -> Result<Option<Session>, WizardError> {
        let (theme, record) = self.begin_analysis()?;
        let outcome = bridge.analysis(&theme, &record).await;
        self.finish_analysis(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::application::ai_bridge::REQUEST_FAILED_MESSAGE;
    use crate::domain::foundation::{SessionId, Timestamp};
    use proptest::prelude::*;
    use std::sync::Arc;

    const SAMPLE_CSV: &str = "Theme,KeepPros,KeepCons,ChangeCons,ChangePros\n\
        \"Job change?\",\"Stability\",\"Boredom\",\"Risk of failure\",\"New growth\"";

    fn controller() -> WizardController {
        let store = SessionHistoryStore::load(Arc::new(InMemoryKeyValueStore::new()));
        WizardController::new(store)
    }

    fn controller_with(kv: InMemoryKeyValueStore) -> WizardController {
        WizardController::new(SessionHistoryStore::load(Arc::new(kv)))
    }

    fn at_review() -> WizardController {
        let mut c = controller();
        c.import_csv(SAMPLE_CSV).unwrap();
        c
    }

    fn bridge_with(provider: MockAIProvider) -> AiBridge {
        AiBridge::new(Some(Arc::new(provider)))
    }

    #[test]
    fn starts_at_intro() {
        let c = controller();
        assert_eq!(c.stage(), WizardStage::Intro);
        assert_eq!(c.stage_mode(), None);
        assert!(!c.has_history());
    }

    #[test]
    fn start_clears_worksheet() {
        let mut c = at_review();
        c.show_history();

        c.start();

        assert_eq!(c.stage(), WizardStage::ThemeInput);
        assert_eq!(c.worksheet(), &Worksheet::new());
        assert!(!c.is_history_view());
    }

    #[test]
    fn advance_requires_theme() {
        let mut c = controller();
        c.start();

        assert_eq!(c.advance(), WizardStage::ThemeInput);

        c.set_theme("Move abroad?");
        assert_eq!(c.advance(), WizardStage::Quadrant1);
        assert_eq!(c.stage_mode(), Some(StageMode::Writing));
    }

    #[test]
    fn full_forward_and_back() {
        let mut c = controller();
        c.start();
        c.set_theme("Quit?");

        for expected in [
            WizardStage::Quadrant1,
            WizardStage::Quadrant2,
            WizardStage::Quadrant3,
            WizardStage::Quadrant4,
            WizardStage::Review,
            WizardStage::Review,
        ] {
            assert_eq!(c.advance(), expected);
        }

        assert_eq!(c.retreat(), WizardStage::Quadrant4);
        for _ in 0..5 {
            c.retreat();
        }
        assert_eq!(c.stage(), WizardStage::Intro);
        assert_eq!(c.retreat(), WizardStage::Intro);
    }

    #[test]
    fn advance_from_intro_is_noop() {
        let mut c = controller();
        assert_eq!(c.advance(), WizardStage::Intro);
    }

    #[test]
    fn update_current_quadrant_writes_bound_field() {
        let mut c = controller();
        c.start();
        assert!(!c.update_current_quadrant("ignored"));

        c.set_theme("Quit?");
        c.advance();
        c.advance();
        assert_eq!(c.current_descriptor(), Some(Quadrant::KeepCons.descriptor()));
        assert!(c.update_current_quadrant("Boredom"));

        assert_eq!(c.worksheet().record.keep_cons, "Boredom");
        assert_eq!(c.worksheet().record.keep_pros, "");
    }

    #[test]
    fn go_to_intro_keeps_worksheet() {
        let mut c = at_review();
        c.go_to_intro();

        assert_eq!(c.stage(), WizardStage::Intro);
        assert_eq!(c.worksheet().theme, "Job change?");
    }

    #[test]
    fn import_sets_fields_and_review() {
        let mut c = controller();
        c.import_csv(SAMPLE_CSV).unwrap();

        assert_eq!(c.stage(), WizardStage::Review);
        assert_eq!(c.worksheet().theme, "Job change?");
        assert_eq!(
            c.worksheet().record,
            QuadrantRecord::new("Stability", "Boredom", "Risk of failure", "New growth")
        );
        assert_eq!(c.worksheet().analysis, None);
    }

    #[test]
    fn failed_import_leaves_state_unchanged() {
        let mut c = controller();
        c.start();
        c.set_theme("Keep me");

        let err = c.import_csv("only a header").unwrap_err();

        assert!(matches!(err, ImportError::TooFewLines { .. }));
        assert_eq!(c.stage(), WizardStage::ThemeInput);
        assert_eq!(c.worksheet().theme, "Keep me");
    }

    #[test]
    fn export_uses_date_in_file_name() {
        let c = at_review();
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

        let export = c.export_csv_on(date);

        assert_eq!(export.file_name, "conflict_management_2024-03-09.csv");
        assert!(export.content.contains("\"Job change?\""));
    }

    #[test]
    fn load_session_opens_review() {
        let mut c = controller();
        c.show_history();
        let session = Session::reconstitute(
            SessionId::from_string("s1"),
            Timestamp::from_millis(0),
            "Saved theme".to_string(),
            QuadrantRecord::new("a", "b", "c", "d"),
            Some("old analysis".to_string()),
        );

        c.load_session(&session);

        assert_eq!(c.stage(), WizardStage::Review);
        assert!(!c.is_history_view());
        assert_eq!(c.worksheet().analysis.as_deref(), Some("old analysis"));
    }

    #[test]
    fn save_draft_twice_keeps_one_entry() {
        let mut c = at_review();
        c.save_draft().unwrap();
        c.save_draft().unwrap();

        assert_eq!(c.history().len(), 1);
        assert!(c.has_history());
    }

    #[test]
    fn save_draft_without_theme_is_noop() {
        let mut c = controller();
        c.start();
        assert_eq!(c.save_draft().unwrap(), None);
        assert!(!c.has_history());
    }

    #[test]
    fn edit_mode_commit_saves() {
        let mut c = at_review();
        c.begin_edit().unwrap();
        c.edit_quadrant(Quadrant::ChangePros, "Learning").unwrap();

        // Buffer only until commit
        assert_eq!(c.worksheet().record.change_pros, "New growth");

        let saved = c.commit_edit().unwrap().unwrap();

        assert_eq!(c.worksheet().record.change_pros, "Learning");
        assert_eq!(saved.data().change_pros, "Learning");
        assert!(!c.is_editing());
    }

    #[test]
    fn edit_mode_cancel_discards() {
        let mut c = at_review();
        c.begin_edit().unwrap();
        c.edit_quadrant(Quadrant::KeepPros, "changed").unwrap();
        c.cancel_edit();

        assert_eq!(c.worksheet().record.keep_pros, "Stability");
        assert_eq!(c.commit_edit(), Err(WizardError::NotEditing));
        assert!(!c.has_history());
    }

    #[test]
    fn edit_mode_only_in_review() {
        let mut c = controller();
        c.start();
        assert_eq!(
            c.begin_edit(),
            Err(WizardError::NotAtStage {
                expected: WizardStage::Review,
                actual: WizardStage::ThemeInput,
            })
        );
        assert_eq!(
            c.edit_quadrant(Quadrant::KeepPros, "x"),
            Err(WizardError::NotEditing)
        );
    }

    #[test]
    fn leaving_review_drops_edit_buffer() {
        let mut c = at_review();
        c.begin_edit().unwrap();
        c.retreat();
        assert!(!c.is_editing());
    }

    #[test]
    fn load_session_discards_open_edit() {
        let mut c = at_review();
        c.begin_edit().unwrap();
        c.show_history();
        let session = Session::reconstitute(
            SessionId::from_string("s2"),
            Timestamp::from_millis(0),
            "Other theme".to_string(),
            QuadrantRecord::new("b1", "b2", "b3", "b4"),
            None,
        );

        c.load_session(&session);

        assert!(!c.is_editing());
        assert_eq!(c.commit_edit(), Err(WizardError::NotEditing));
        assert_eq!(c.worksheet().record.keep_pros, "b1");
        assert!(!c.has_history());
    }

    #[test]
    fn import_discards_open_edit() {
        let mut c = at_review();
        c.begin_edit().unwrap();
        c.edit_quadrant(Quadrant::KeepPros, "stale").unwrap();

        c.import_csv("h\n\"Other theme\",\"b1\",\"b2\",\"b3\",\"b4\"")
            .unwrap();

        assert!(!c.is_editing());
        assert_eq!(c.worksheet().theme, "Other theme");
        assert_eq!(c.worksheet().record.keep_pros, "b1");
    }

    #[test]
    fn commit_edit_reports_store_failure() {
        let mut c = controller_with(InMemoryKeyValueStore::new().failing_writes());
        c.import_csv(SAMPLE_CSV).unwrap();
        c.begin_edit().unwrap();

        let result = c.commit_edit();

        assert!(matches!(result, Err(WizardError::Store(_))));
        assert_eq!(c.history().len(), 1);
    }

    #[test]
    fn begin_draft_preconditions() {
        let mut c = controller();
        assert!(matches!(
            c.begin_draft(),
            Err(WizardError::NotAtStage { .. })
        ));

        c.start();
        c.set_theme("  ");
        assert_eq!(c.begin_draft(), Err(WizardError::EmptyTheme));

        c.set_theme("Quit?");
        assert!(c.can_request_draft());
        assert_eq!(c.begin_draft().unwrap(), "Quit?");
        assert_eq!(c.begin_draft(), Err(WizardError::DraftInFlight));
    }

    #[test]
    fn drafting_blocks_theme_edits_and_advance() {
        let mut c = controller();
        c.start();
        c.set_theme("Quit?");
        c.begin_draft().unwrap();

        c.set_theme("Other");
        assert_eq!(c.worksheet().theme, "Quit?");
        assert_eq!(c.advance(), WizardStage::ThemeInput);
        assert!(!c.can_request_draft());
    }

    #[test]
    fn finish_draft_applies_record() {
        let mut c = controller();
        c.start();
        c.set_theme("Quit?");
        c.begin_draft().unwrap();

        let record = QuadrantRecord::new("a", "b", "c", "d");
        let notice = c
            .finish_draft(BridgeOutcome::Generated(record.clone()))
            .unwrap();

        assert_eq!(notice, DraftNotice::Applied);
        assert_eq!(notice.message(), None);
        assert_eq!(c.stage(), WizardStage::Quadrant1);
        assert_eq!(c.worksheet().record, record);
        assert!(!c.is_drafting());
    }

    #[test]
    fn finish_draft_without_begin_is_error() {
        let mut c = controller();
        assert_eq!(
            c.finish_draft(BridgeOutcome::Fallback(FallbackReason::EmptyResponse)),
            Err(WizardError::DraftNotPending)
        );
    }

    #[tokio::test]
    async fn request_draft_without_credential_stays_on_theme() {
        let mut c = controller();
        c.start();
        c.set_theme("Quit?");

        let notice = c.request_draft(&AiBridge::unconfigured()).await.unwrap();

        assert_eq!(notice, DraftNotice::Failed(FallbackReason::MissingCredential));
        assert_eq!(notice.message(), Some(DRAFT_FAILED_MESSAGE));
        assert_eq!(c.stage(), WizardStage::ThemeInput);
        assert!(!c.is_drafting());
        assert!(c.worksheet().record.is_empty());
    }

    #[tokio::test]
    async fn request_draft_with_provider_moves_to_first_quadrant() {
        let bridge = bridge_with(MockAIProvider::new().with_response(
            r#"{"keepPros":"Calm","keepCons":"Stuck","changeCons":"Fear","changePros":"Hope"}"#,
        ));
        let mut c = controller();
        c.start();
        c.set_theme("Quit?");

        c.request_draft(&bridge).await.unwrap();

        assert_eq!(c.stage(), WizardStage::Quadrant1);
        assert_eq!(c.worksheet().record.change_pros, "Hope");
    }

    #[tokio::test]
    async fn request_analysis_stores_and_saves() {
        let bridge = bridge_with(MockAIProvider::new().with_response("## You value safety"));
        let mut c = at_review();

        let saved = c.request_analysis(&bridge).await.unwrap().unwrap();

        assert_eq!(c.worksheet().analysis.as_deref(), Some("## You value safety"));
        assert_eq!(saved.ai_analysis(), Some("## You value safety"));
        assert!(!c.is_analyzing());
    }

    #[tokio::test]
    async fn request_analysis_failure_stores_fallback_text() {
        let bridge = bridge_with(MockAIProvider::new().with_error(MockError::Network {
            message: "offline".to_string(),
        }));
        let mut c = at_review();

        c.request_analysis(&bridge).await.unwrap();

        assert_eq!(c.worksheet().analysis.as_deref(), Some(REQUEST_FAILED_MESSAGE));
    }

    #[test]
    fn analysis_in_flight_is_refused() {
        let mut c = at_review();
        c.begin_analysis().unwrap();
        assert_eq!(c.begin_analysis(), Err(WizardError::AnalysisInFlight));
    }

    fn stage_strategy() -> impl Strategy<Value = Vec<bool>> {
        prop::collection::vec(any::<bool>(), 0..40)
    }

    proptest! {
        #[test]
        fn retreat_undoes_advance(steps in stage_strategy()) {
            let mut c = controller();
            c.start();
            c.set_theme("Quit?");

            for forward in steps {
                let before = c.stage();
                if forward {
                    let after = c.advance();
                    if after != before {
                        prop_assert_eq!(c.retreat(), before);
                        c.advance();
                    }
                } else {
                    c.retreat();
                }
                prop_assert!(WizardStage::all().contains(&c.stage()));
            }
        }

        #[test]
        fn whitespace_theme_never_advances(theme in "[ \t\n\r]{0,12}") {
            let mut c = controller();
            c.start();
            c.set_theme(theme);
            prop_assert_eq!(c.advance(), WizardStage::ThemeInput);
        }
    }
}
