//! Foundation module - Shared domain primitives.
//!
//! Contains the identifier and time value objects used across the
//! worksheet, wizard and history modules.

mod ids;
mod timestamp;

pub use ids::SessionId;
pub use timestamp::Timestamp;
