//! Session module - saved worksheet snapshots and their history.

mod aggregate;
mod history;

pub use aggregate::Session;
pub use history::{History, MAX_HISTORY_ENTRIES, SUPERSEDE_WINDOW_MILLIS};
