//! Phase model definition.

use serde::{Deserialize, Serialize};

use super::Step;

/// Name fragments that mark a phase as a pre-ferment or soaker.
const PARALLEL_NAME_HINTS: &[&str] = &[
    "vorteig",
    "sauerteig",
    "starter",
    "levain",
    "poolish",
    "biga",
    "quellstück",
    "brühstück",
    "soaker",
];

/// A named stage of a recipe ("dough section") holding ordered steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    /// Display name of the phase
    pub name: String,

    /// Whether the phase may run alongside the main chain
    #[serde(default)]
    pub is_parallel: bool,

    /// Steps in execution order
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Phase {
    pub fn sequential(name: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            is_parallel: false,
            steps,
        }
    }

    pub fn parallel(name: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            is_parallel: true,
            steps,
        }
    }

    /// Default parallel flag for a freshly created phase with this name.
    ///
    /// Only consulted when a phase is created without an explicit flag. The
    /// scheduler reads [`Phase::is_parallel`] and nothing else.
    pub fn infer_parallel(name: &str) -> bool {
        let name = name.to_lowercase();
        PARALLEL_NAME_HINTS.iter().any(|hint| name.contains(hint))
    }
}
