//! Phase aggregation: totals and sequential/parallel classification.

use serde::{Deserialize, Serialize};

use crate::models::Phase;

/// How a phase relates to the main chain of the recipe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PhaseKind {
    /// On the critical path; abuts its neighbours
    Sequential,
    /// A side branch that only has to finish by its synchronization point
    Parallel,
}

impl PhaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseKind::Sequential => "sequential",
            PhaseKind::Parallel => "parallel",
        }
    }
}

impl Phase {
    /// Sum of the phase's step durations in minutes.
    pub fn total_minutes(&self) -> u64 {
        self.steps
            .iter()
            .map(|step| u64::from(step.duration_minutes))
            .sum()
    }

    /// Classification read straight from the stored flag.
    pub fn kind(&self) -> PhaseKind {
        if self.is_parallel {
            PhaseKind::Parallel
        } else {
            PhaseKind::Sequential
        }
    }
}

/// Rough total duration of a recipe for feasibility checks and summaries.
///
/// Sequential phases add up; of the parallel phases only the longest counts.
/// This is not the authoritative schedule, see
/// [`super::compute_timeline`] for that.
pub fn estimate_total_minutes(phases: &[Phase]) -> u64 {
    let sequential: u64 = phases
        .iter()
        .filter(|phase| phase.kind() == PhaseKind::Sequential)
        .map(Phase::total_minutes)
        .sum();
    let longest_parallel = phases
        .iter()
        .filter(|phase| phase.kind() == PhaseKind::Parallel)
        .map(Phase::total_minutes)
        .max()
        .unwrap_or(0);

    sequential + longest_parallel
}
