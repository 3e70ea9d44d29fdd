//! Wiring of configuration into a ready-to-use controller and bridge.

use std::sync::Arc;

use tracing::info;

use crate::adapters::ai::provider_from_config;
use crate::adapters::storage::FileKeyValueStore;
use crate::application::{
    AiBridge, DraftNotice, SessionHistoryStore, WizardController, WizardError,
};
use crate::config::AppConfig;
use crate::domain::session::Session;
use crate::ports::KeyValueStore;

/// The controller plus the bridge its AI operations go through.
#[derive(Debug)]
pub struct Workbench {
    pub controller: WizardController,
    pub bridge: AiBridge,
}

impl Workbench {
    /// Build from configuration: file-backed history, Gemini if a key is set.
    pub fn from_config(config: &AppConfig) -> Self {
        let data_dir = config.storage.resolve_data_dir();
        let store: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(&data_dir));
        let bridge = AiBridge::new(provider_from_config(&config.ai));

        info!(
            data_dir = %data_dir.display(),
            ai_enabled = bridge.is_configured(),
            "workbench ready"
        );

        Self::with_parts(store, bridge)
    }

    /// Build from an explicit store and bridge.
    pub fn with_parts(store: Arc<dyn KeyValueStore>, bridge: AiBridge) -> Self {
        let history = SessionHistoryStore::load(store);
        Self {
            controller: WizardController::new(history),
            bridge,
        }
    }

    /// Request a draft for the current theme.
    pub async fn request_draft(&mut self) -> Result<DraftNotice, WizardError> {
        self.controller.request_draft(&self.bridge).await
    }

    /// Request an analysis of the current worksheet and save it.
    pub async fn request_analysis(&mut self) -> Result<Option<Session>, WizardError> {
        self.controller.request_analysis(&self.bridge).await
    }
}
