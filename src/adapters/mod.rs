//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the worksheet to external systems:
//! - `ai` - Text-generation providers (Gemini, mock)
//! - `storage` - Key-value stores for the session history (file, in-memory)

pub mod ai;
pub mod storage;

pub use ai::{provider_from_config, GeminiConfig, GeminiProvider, MockAIProvider};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
