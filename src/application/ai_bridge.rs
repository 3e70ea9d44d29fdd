//! AiBridge - Draft and analysis requests against an optional provider.
//!
//! Every failure mode is absorbed here: callers receive either generated
//! content or a [`FallbackReason`], never an error. The legacy call shapes
//! (`generate_draft` returning `Option`, `analyze_conflict` always returning
//! text) are thin wrappers over the unified [`BridgeOutcome`].

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use super::prompts::{analysis_prompt, draft_prompt};
use crate::domain::worksheet::QuadrantRecord;
use crate::ports::{AIError, AIProvider, CompletionRequest, ResponseFormat};

/// Shown when no API key is configured.
pub const MISSING_CREDENTIAL_MESSAGE: &str =
    "AI analysis is unavailable because no API key is configured.";

/// Shown when the provider call fails.
pub const REQUEST_FAILED_MESSAGE: &str =
    "Sorry, an error occurred during AI analysis. Please wait a moment and try again.";

/// Shown when the provider answers with no text.
pub const EMPTY_RESPONSE_MESSAGE: &str = "The analysis could not be generated.";

/// Why generated content is unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// No provider is configured.
    MissingCredential,
    /// The provider call failed.
    RequestFailed(String),
    /// The provider returned no usable text.
    EmptyResponse,
    /// The provider returned text that is not a draft object.
    Unparseable(String),
}

impl FallbackReason {
    /// Human-readable text standing in for an analysis.
    pub fn analysis_message(&self) -> &'static str {
        match self {
            Self::MissingCredential => MISSING_CREDENTIAL_MESSAGE,
            Self::RequestFailed(_) | Self::Unparseable(_) => REQUEST_FAILED_MESSAGE,
            Self::EmptyResponse => EMPTY_RESPONSE_MESSAGE,
        }
    }
}

/// Result of a bridge call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeOutcome<T> {
    Generated(T),
    Fallback(FallbackReason),
}

impl<T> BridgeOutcome<T> {
    /// The generated value, if any.
    pub fn generated(self) -> Option<T> {
        match self {
            Self::Generated(value) => Some(value),
            Self::Fallback(_) => None,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }
}

impl BridgeOutcome<String> {
    /// The analysis text, or the fixed message for the fallback.
    pub fn into_text(self) -> String {
        match self {
            Self::Generated(text) => text,
            Self::Fallback(reason) => reason.analysis_message().to_string(),
        }
    }
}

/// Draft payload as returned by the model; absent keys become empty text.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DraftPayload {
    keep_pros: Option<String>,
    keep_cons: Option<String>,
    change_cons: Option<String>,
    change_pros: Option<String>,
}

impl From<DraftPayload> for QuadrantRecord {
    fn from(payload: DraftPayload) -> Self {
        QuadrantRecord::new(
            payload.keep_pros.unwrap_or_default(),
            payload.keep_cons.unwrap_or_default(),
            payload.change_cons.unwrap_or_default(),
            payload.change_pros.unwrap_or_default(),
        )
    }
}

/// Bridge between the worksheet and a text-generation provider.
#[derive(Clone)]
pub struct AiBridge {
    provider: Option<Arc<dyn AIProvider>>,
}

impl std::fmt::Debug for AiBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiBridge")
            .field("provider", &self.provider.as_ref().map(|p| p.provider_info()))
            .finish()
    }
}

impl AiBridge {
    /// Creates a bridge; `None` means no credential is configured.
    pub fn new(provider: Option<Arc<dyn AIProvider>>) -> Self {
        Self { provider }
    }

    /// Creates a bridge with no provider.
    pub fn unconfigured() -> Self {
        Self { provider: None }
    }

    /// True when a provider is available.
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Ask for starting values for all four quadrants.
    pub async fn draft(&self, theme: &str) -> BridgeOutcome<QuadrantRecord> {
        let Some(provider) = &self.provider else {
            debug!("draft requested without an API key");
            return BridgeOutcome::Fallback(FallbackReason::MissingCredential);
        };

        let request =
            CompletionRequest::new(draft_prompt(theme)).with_response_format(ResponseFormat::Json);

        let content = match provider.complete(request).await {
            Ok(response) => response.content,
            Err(err) => return request_failed("draft", err),
        };

        if content.trim().is_empty() {
            warn!("draft response was empty");
            return BridgeOutcome::Fallback(FallbackReason::EmptyResponse);
        }

        match parse_draft(&content) {
            Ok(record) => {
                debug!("draft generated");
                BridgeOutcome::Generated(record)
            }
            Err(reason) => {
                warn!(error = %reason, "draft response could not be parsed");
                BridgeOutcome::Fallback(FallbackReason::Unparseable(reason))
            }
        }
    }

    /// [`draft`](Self::draft) collapsed to `Option`.
    pub async fn generate_draft(&self, theme: &str) -> Option<QuadrantRecord> {
        self.draft(theme).await.generated()
    }

    /// Ask for a Markdown reflection on a completed worksheet.
    pub async fn analysis(&self, theme: &str, record: &QuadrantRecord) -> BridgeOutcome<String> {
        let Some(provider) = &self.provider else {
            debug!("analysis requested without an API key");
            return BridgeOutcome::Fallback(FallbackReason::MissingCredential);
        };

        let request = CompletionRequest::new(analysis_prompt(theme, record)).with_thinking_budget(0);

        match provider.complete(request).await {
            Ok(response) if response.content.trim().is_empty() => {
                warn!("analysis response was empty");
                BridgeOutcome::Fallback(FallbackReason::EmptyResponse)
            }
            Ok(response) => BridgeOutcome::Generated(response.content),
            Err(err) => request_failed("analysis", err),
        }
    }

    /// [`analysis`](Self::analysis) with fallbacks replaced by fixed messages.
    pub async fn analyze_conflict(&self, theme: &str, record: &QuadrantRecord) -> String {
        self.analysis(theme, record).await.into_text()
    }
}

fn request_failed<T>(operation: &str, err: AIError) -> BridgeOutcome<T> {
    warn!(operation, error = %err, "AI request failed");
    BridgeOutcome::Fallback(FallbackReason::RequestFailed(err.to_string()))
}

/// Parse a draft object, unwrapping a fenced code block if present.
fn parse_draft(content: &str) -> Result<QuadrantRecord, String> {
    let body = strip_code_fence(content);
    serde_json::from_str::<DraftPayload>(body)
        .map(QuadrantRecord::from)
        .map_err(|e| e.to_string())
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Skip the info string ("json") up to the first newline.
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
