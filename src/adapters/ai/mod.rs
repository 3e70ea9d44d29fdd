//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini over the `generateContent` REST call
//! - `MockAIProvider` - Configurable mock for testing

mod gemini_provider;
mod mock_provider;

use std::sync::Arc;

pub use gemini_provider::{GeminiConfig, GeminiProvider, DEFAULT_GEMINI_BASE_URL, GEMINI_MODEL};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};

use crate::config::AiConfig;
use crate::ports::AIProvider;

/// Build the configured provider, or `None` when no API key is set.
pub fn provider_from_config(config: &AiConfig) -> Option<Arc<dyn AIProvider>> {
    let key = config.gemini_api_key.as_deref().map(str::trim)?;
    if key.is_empty() {
        return None;
    }

    let gemini = GeminiConfig::new(key).with_base_url(config.base_url.clone());
    Some(Arc::new(GeminiProvider::new(gemini)))
}
