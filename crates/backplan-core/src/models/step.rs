//! Step model definition.

use serde::{Deserialize, Serialize};

use super::StepKind;

/// A single step within a phase, already normalized.
///
/// The duration is fixed once scheduled; scaling a recipe's batch size
/// does not change how long dough rests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// What to do, as authored
    pub instruction: String,

    /// Kind of work the step represents
    #[serde(default)]
    pub kind: StepKind,

    /// Duration in whole minutes
    pub duration_minutes: u32,
}

impl Step {
    pub fn new(instruction: impl Into<String>, kind: StepKind, duration_minutes: u32) -> Self {
        Self {
            instruction: instruction.into(),
            kind,
            duration_minutes,
        }
    }
}
