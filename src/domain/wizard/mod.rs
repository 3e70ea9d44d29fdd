//! Wizard module - the stage vocabulary of the worksheet flow.

mod stage;

pub use stage::{StageMode, WizardStage};
