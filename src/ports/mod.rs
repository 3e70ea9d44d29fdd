//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the worksheet logic and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Remote text generation behind drafts and analyses
//! - `KeyValueStore` - Client-side persistence for the session history

mod ai_provider;
mod key_value_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    ResponseFormat,
};
pub use key_value_store::{KeyValueStore, StoreError};
