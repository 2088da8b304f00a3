//! Recipe model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Phase;

/// A stored recipe with its ordered phase list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Unique identifier for the recipe
    pub id: u64,

    /// Title of the recipe
    pub title: String,

    /// Free-form notes
    pub description: Option<String>,

    /// Where the recipe was imported from, if anywhere
    pub source_url: Option<String>,

    /// Phases in authored order; the last one ends at completion
    #[serde(default)]
    pub phases: Vec<Phase>,

    /// Timestamp when the recipe was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the recipe was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Recipe {
    /// Number of steps across all phases.
    pub fn step_count(&self) -> usize {
        self.phases.iter().map(|phase| phase.steps.len()).sum()
    }
}
