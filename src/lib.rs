//! Conflict Worksheet - Guided Decisional-Balance Worksheets
//!
//! This crate walks a person through a four-quadrant worksheet about a change
//! they are weighing (benefits and costs of staying, costs and benefits of
//! changing), keeps a short local history of finished worksheets, exchanges
//! them as single-row CSV files, and optionally asks a generative-text
//! service for a draft or a reflective analysis.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

pub use bootstrap::Workbench;
