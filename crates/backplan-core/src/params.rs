//! Parameter structures for library operations.
//!
//! These structures are shared by every interface (today the CLI) and carry
//! no framework-specific derives beyond serde. Interface layers define their
//! own argument types and convert into these with `From`:
//!
//! ```text
//! CLI args (clap) ──into()──▶ core params ──▶ Library
//! ```
//!
//! [`CreateRecipe`] doubles as the JSON import document format.

use serde::{Deserialize, Serialize};

use crate::{models::RawPhase, schedule::Anchor};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_recipe, bake_status, cancel_bake.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for adding a recipe to the library.
///
/// # Examples
///
/// ```rust
/// use backplan_core::params::CreateRecipe;
///
/// let doc = r#"{
///     "title": "Roggenmischbrot",
///     "phases": [
///         { "name": "Sauerteig", "steps": [
///             { "instruction": "Mix starter", "kind": "action", "durationMinutes": 5 },
///             { "instruction": "Ferment", "kind": "wait", "durationMinutes": 720 }
///         ] },
///         { "name": "Hauptteig", "isParallel": false, "steps": [
///             { "instruction": "Bake", "kind": "bake", "durationMinutes": 50 }
///         ] }
///     ]
/// }"#;
/// let params: CreateRecipe = serde_json::from_str(doc).unwrap();
/// assert_eq!(params.phases.len(), 2);
/// assert_eq!(params.phases[0].is_parallel, None);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipe {
    /// Title of the recipe (required)
    pub title: String,
    /// Optional notes
    #[serde(default)]
    pub description: Option<String>,
    /// Optional address the recipe came from
    #[serde(default)]
    pub source_url: Option<String>,
    /// Phases in authored order, not yet normalized
    #[serde(default)]
    pub phases: Vec<RawPhase>,
}

/// Parameters for deleting a recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteRecipe {
    /// ID of the recipe to delete
    pub id: u64,
    /// Deletion must be confirmed explicitly
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for planning a bake of a stored recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartBake {
    /// ID of the recipe to bake
    pub recipe_id: u64,
    /// Instant the schedule is anchored to
    pub anchor: Anchor,
}

/// Parameters for toggling a step's completion in a running bake.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleStep {
    /// ID of the recipe being baked
    pub recipe_id: u64,
    /// Timeline index of the step (0-indexed)
    pub index: usize,
}
