//! Quadrant enum and the per-quadrant descriptor table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four pros/cons categories of the decisional-balance exercise,
/// in the order the wizard visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Quadrant {
    /// Benefits of keeping the status quo.
    KeepPros,
    /// Costs of keeping the status quo.
    KeepCons,
    /// Costs of changing.
    ChangeCons,
    /// Benefits of changing.
    ChangePros,
}

/// Symbolic accent color for a quadrant card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Blue,
    Red,
    Orange,
    Green,
}

/// Immutable presentation record for a quadrant stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageDescriptor {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

const KEEP_PROS: StageDescriptor = StageDescriptor {
    title: "Benefits of not changing",
    subtitle: "What is good about the status quo?",
    description: "Write down the comfort, the ease and the gains of staying as you are.",
    accent: Accent::Blue,
};

const KEEP_CONS: StageDescriptor = StageDescriptor {
    title: "Costs of not changing",
    subtitle: "What does the status quo cost you?",
    description: "Write down what you lose by staying as you are, your worries about the future and what you dislike.",
    accent: Accent::Red,
};

const CHANGE_CONS: StageDescriptor = StageDescriptor {
    title: "Costs of changing",
    subtitle: "What makes taking action feel uneasy?",
    description: "Write down your fears about acting, the risks, the hassle and what you might lose.",
    accent: Accent::Orange,
};

const CHANGE_PROS: StageDescriptor = StageDescriptor {
    title: "Benefits of changing",
    subtitle: "What awaits you if you act?",
    description: "Imagine the hope, growth and new possibilities change brings, and the problems it solves.",
    accent: Accent::Green,
};

impl Quadrant {
    /// Returns all quadrants in wizard order.
    pub fn all() -> &'static [Quadrant] {
        &[
            Quadrant::KeepPros,
            Quadrant::KeepCons,
            Quadrant::ChangeCons,
            Quadrant::ChangePros,
        ]
    }

    /// Returns the descriptor shown while this quadrant is being written.
    pub fn descriptor(&self) -> &'static StageDescriptor {
        match self {
            Quadrant::KeepPros => &KEEP_PROS,
            Quadrant::KeepCons => &KEEP_CONS,
            Quadrant::ChangeCons => &CHANGE_CONS,
            Quadrant::ChangePros => &CHANGE_PROS,
        }
    }

    /// Field name used in JSON payloads.
    pub fn field_name(&self) -> &'static str {
        match self {
            Quadrant::KeepPros => "keepPros",
            Quadrant::KeepCons => "keepCons",
            Quadrant::ChangeCons => "changeCons",
            Quadrant::ChangePros => "changePros",
        }
    }

    /// Column name used in CSV exchange files.
    pub fn csv_column(&self) -> &'static str {
        match self {
            Quadrant::KeepPros => "KeepPros",
            Quadrant::KeepCons => "KeepCons",
            Quadrant::ChangeCons => "ChangeCons",
            Quadrant::ChangePros => "ChangePros",
        }
    }

    /// True for the two status-quo quadrants.
    pub fn is_keep(&self) -> bool {
        matches!(self, Quadrant::KeepPros | Quadrant::KeepCons)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.descriptor().title)
    }
}
