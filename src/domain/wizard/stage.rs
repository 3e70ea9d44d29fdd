//! WizardStage enum representing the seven worksheet stages.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::worksheet::{Quadrant, StageDescriptor};

/// The seven ordered wizard stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStage {
    Intro,
    ThemeInput,
    Quadrant1,
    Quadrant2,
    Quadrant3,
    Quadrant4,
    Review,
}

/// Header badge shown outside the intro screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageMode {
    Writing,
    Review,
}

impl StageMode {
    pub fn label(&self) -> &'static str {
        match self {
            StageMode::Writing => "Writing Mode",
            StageMode::Review => "Review Mode",
        }
    }
}

impl WizardStage {
    /// Returns all stages in canonical order.
    pub fn all() -> &'static [WizardStage] {
        &[
            WizardStage::Intro,
            WizardStage::ThemeInput,
            WizardStage::Quadrant1,
            WizardStage::Quadrant2,
            WizardStage::Quadrant3,
            WizardStage::Quadrant4,
            WizardStage::Review,
        ]
    }

    /// Forward edge, if this stage has one.
    ///
    /// `Intro` has no forward edge (it is left via `start`), neither has
    /// `Review`.
    pub fn next(&self) -> Option<WizardStage> {
        match self {
            WizardStage::ThemeInput => Some(WizardStage::Quadrant1),
            WizardStage::Quadrant1 => Some(WizardStage::Quadrant2),
            WizardStage::Quadrant2 => Some(WizardStage::Quadrant3),
            WizardStage::Quadrant3 => Some(WizardStage::Quadrant4),
            WizardStage::Quadrant4 => Some(WizardStage::Review),
            WizardStage::Intro | WizardStage::Review => None,
        }
    }

    /// Backward edge, if this stage has one.
    pub fn previous(&self) -> Option<WizardStage> {
        match self {
            WizardStage::Intro => None,
            WizardStage::ThemeInput => Some(WizardStage::Intro),
            WizardStage::Quadrant1 => Some(WizardStage::ThemeInput),
            WizardStage::Quadrant2 => Some(WizardStage::Quadrant1),
            WizardStage::Quadrant3 => Some(WizardStage::Quadrant2),
            WizardStage::Quadrant4 => Some(WizardStage::Quadrant3),
            WizardStage::Review => Some(WizardStage::Quadrant4),
        }
    }

    /// The quadrant written during this stage.
    pub fn quadrant(&self) -> Option<Quadrant> {
        match self {
            WizardStage::Quadrant1 => Some(Quadrant::KeepPros),
            WizardStage::Quadrant2 => Some(Quadrant::KeepCons),
            WizardStage::Quadrant3 => Some(Quadrant::ChangeCons),
            WizardStage::Quadrant4 => Some(Quadrant::ChangePros),
            _ => None,
        }
    }

    /// Descriptor for quadrant stages.
    pub fn descriptor(&self) -> Option<&'static StageDescriptor> {
        self.quadrant().map(|q| q.descriptor())
    }

    /// Header badge; `None` on the intro screen.
    pub fn mode(&self) -> Option<StageMode> {
        match self {
            WizardStage::Intro => None,
            WizardStage::Review => Some(StageMode::Review),
            _ => Some(StageMode::Writing),
        }
    }

    /// 1-based quadrant step number, for "Step n of 4" style progress.
    pub fn quadrant_step(&self) -> Option<usize> {
        let quadrant = self.quadrant()?;
        Quadrant::all()
            .iter()
            .position(|q| *q == quadrant)
            .map(|idx| idx + 1)
    }
}

impl fmt::Display for WizardStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardStage::Intro => "Intro",
            WizardStage::ThemeInput => "Theme",
            WizardStage::Quadrant1 => "Quadrant 1",
            WizardStage::Quadrant2 => "Quadrant 2",
            WizardStage::Quadrant3 => "Quadrant 3",
            WizardStage::Quadrant4 => "Quadrant 4",
            WizardStage::Review => "Review",
        };
        write!(f, "{}", name)
    }
}
