//! Enumerations for step kinds and live step states.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of what a step asks of the baker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Hands-on work: mixing, folding, shaping
    #[default]
    Action,

    /// Passive time: resting, proofing, fermenting
    Wait,

    /// Time in the oven
    Bake,
}

impl FromStr for StepKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "action" => Ok(StepKind::Action),
            "wait" => Ok(StepKind::Wait),
            "bake" => Ok(StepKind::Bake),
            _ => Err(format!("Invalid step kind: {s}")),
        }
    }
}

impl StepKind {
    /// Lowercase name used for storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Action => "action",
            StepKind::Wait => "wait",
            StepKind::Bake => "bake",
        }
    }
}

/// Live state of a scheduled step at a given instant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    /// Completed explicitly or because its end has passed
    Done,

    /// Running right now
    Active,

    /// Not started yet, or waiting in a gap
    Pending,
}

impl StepState {
    /// Get the state with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backplan_core::models::StepState;
    ///
    /// assert_eq!(StepState::Done.with_icon(), "✓ Done");
    /// assert_eq!(StepState::Active.with_icon(), "➤ Active");
    /// assert_eq!(StepState::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepState::Done => "✓ Done",
            StepState::Active => "➤ Active",
            StepState::Pending => "○ Pending",
        }
    }
}
