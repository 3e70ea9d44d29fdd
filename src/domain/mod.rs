//! Domain layer containing the worksheet vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (identifiers, timestamps)
//! - `worksheet` - Quadrants, the worksheet record and its CSV exchange format
//! - `wizard` - The seven wizard stages and their edges
//! - `session` - Saved snapshots and the bounded history

pub mod foundation;
pub mod session;
pub mod wizard;
pub mod worksheet;
