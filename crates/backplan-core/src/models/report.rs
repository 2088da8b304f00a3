//! Aggregates returned by library operations.

use jiff::Timestamp;
use serde::Serialize;

use super::{BakeSession, Recipe};
use crate::{
    error::{MalformedStep, Result},
    schedule::{compute_timeline, query_progress, Anchor, CompletionSet, Progress, Timeline},
};

/// A freshly added recipe plus whatever normalization had to coerce.
#[derive(Debug, Clone)]
pub struct ImportedRecipe {
    pub recipe: Recipe,
    pub warnings: Vec<MalformedStep>,
}

/// Everything a caller needs to show a bake at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct BakeReport {
    pub recipe_id: u64,
    pub title: String,
    pub anchor: Anchor,
    pub finish_at: Timestamp,
    pub timeline: Timeline,
    pub completed: CompletionSet,
    pub progress: Progress,
    pub now: Timestamp,
}

impl BakeReport {
    /// Recomputes the timeline from the session's anchor and reports on it.
    pub fn build(recipe: &Recipe, session: &BakeSession, now: Timestamp) -> Result<Self> {
        let finish_at = session.anchor.finish_time(&recipe.phases)?;
        let timeline = compute_timeline(&recipe.phases, finish_at)?;
        Ok(Self::from_timeline(recipe, session, timeline, finish_at, now))
    }

    pub(crate) fn from_timeline(
        recipe: &Recipe,
        session: &BakeSession,
        timeline: Timeline,
        finish_at: Timestamp,
        now: Timestamp,
    ) -> Self {
        let progress = query_progress(&timeline, now, &session.completed);
        Self {
            recipe_id: recipe.id,
            title: recipe.title.clone(),
            anchor: session.anchor,
            finish_at,
            timeline,
            completed: session.completed.clone(),
            progress,
            now,
        }
    }
}
