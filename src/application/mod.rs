//! Application layer - Orchestration of the worksheet flow.
//!
//! This layer drives domain operations and coordinates between ports:
//! - `wizard_controller` - stage navigation, editing, import/export, AI requests
//! - `history_store` - session history mirrored to a key-value store
//! - `ai_bridge` - draft and analysis requests with fallbacks
//! - `prompts` - the fixed prompt templates

mod ai_bridge;
mod history_store;
mod prompts;
mod wizard_controller;

pub use ai_bridge::{
    AiBridge, BridgeOutcome, FallbackReason, EMPTY_RESPONSE_MESSAGE, MISSING_CREDENTIAL_MESSAGE,
    REQUEST_FAILED_MESSAGE,
};
pub use history_store::{SessionHistoryStore, HISTORY_STORAGE_KEY};
pub use prompts::{analysis_prompt, draft_prompt};
pub use wizard_controller::{DraftNotice, WizardController, WizardError, DRAFT_FAILED_MESSAGE};
