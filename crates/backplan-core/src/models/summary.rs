//! Recipe summary types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Recipe;
use crate::schedule::estimate_total_minutes;

/// Compact information about a recipe for list views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Recipe ID
    pub id: u64,
    /// Title of the recipe
    pub title: String,
    /// Number of phases
    pub phase_count: u32,
    /// Number of steps across all phases
    pub step_count: u32,
    /// Estimated total duration in minutes
    pub total_minutes: u64,
    /// Whether a bake is currently planned for the recipe
    pub has_active_bake: bool,
    /// Creation timestamp
    pub created_at: Timestamp,
}

impl RecipeSummary {
    /// Create a summary from a recipe and its bake status.
    pub fn from_recipe(recipe: &Recipe, has_active_bake: bool) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title.clone(),
            phase_count: recipe.phases.len() as u32,
            step_count: recipe.step_count() as u32,
            total_minutes: estimate_total_minutes(&recipe.phases),
            has_active_bake,
            created_at: recipe.created_at,
        }
    }
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self::from_recipe(recipe, false)
    }
}
