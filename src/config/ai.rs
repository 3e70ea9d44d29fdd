//! AI provider configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::ai::DEFAULT_GEMINI_BASE_URL;

/// AI provider configuration
///
/// An absent key is a valid configuration: drafts and analyses then fall
/// back to their fixed messages.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key
    pub gemini_api_key: Option<String>,

    /// REST endpoint root for the Gemini API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl AiConfig {
    /// Check if a usable Gemini key is present
    pub fn has_gemini(&self) -> bool {
        self.gemini_api_key
            .as_ref()
            .is_some_and(|k| !k.trim().is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}
