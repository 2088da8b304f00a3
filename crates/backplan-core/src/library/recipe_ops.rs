//! Recipe operations for the Library.

use log::{info, warn};

use super::Library;
use crate::{
    display::RecipeSummaries,
    error::{BackplanError, Result},
    models::{ImportedRecipe, Recipe},
    params::{CreateRecipe, DeleteRecipe, Id},
    schedule::normalize_phases,
};

impl Library {
    /// Adds a recipe to the library.
    ///
    /// Steps are normalized on the way in: malformed durations are coerced
    /// to zero-minute actions and reported in
    /// [`ImportedRecipe::warnings`] instead of failing the import. Phases
    /// without an explicit parallel flag get one from their name, once.
    ///
    /// # Errors
    ///
    /// Returns `BackplanError::InvalidInput` for an empty title or phase name.
    pub async fn add_recipe(&self, params: &CreateRecipe) -> Result<ImportedRecipe> {
        let title = params.title.trim().to_string();
        if title.is_empty() {
            return Err(BackplanError::invalid_input("title").with_reason("Title cannot be empty"));
        }
        if let Some(position) = params.phases.iter().position(|p| p.name.trim().is_empty()) {
            return Err(BackplanError::invalid_input("phases")
                .with_reason(format!("Phase {} has no name", position + 1)));
        }

        let normalized = normalize_phases(&params.phases);
        if !normalized.warnings.is_empty() {
            warn!(
                "Recipe '{title}' imported with {} coerced step(s)",
                normalized.warnings.len()
            );
        }

        let description = params.description.clone();
        let source_url = params.source_url.clone();
        let phases = normalized.phases;
        let recipe = self
            .with_database(move |db| {
                db.create_recipe(
                    &title,
                    description.as_deref(),
                    source_url.as_deref(),
                    &phases,
                )
            })
            .await?;

        info!("Added recipe {} '{}'", recipe.id, recipe.title);
        Ok(ImportedRecipe {
            recipe,
            warnings: normalized.warnings,
        })
    }

    /// Retrieves a recipe by its ID.
    pub async fn get_recipe(&self, params: &Id) -> Result<Option<Recipe>> {
        let id = params.id;
        self.with_database(move |db| db.get_recipe(id)).await
    }

    /// Lists every recipe as a summary.
    pub async fn list_recipes(&self) -> Result<RecipeSummaries> {
        let summaries = self.with_database(|db| db.list_recipes()).await?;
        Ok(RecipeSummaries(summaries))
    }

    /// Permanently deletes a recipe and any bake planned for it.
    ///
    /// # Errors
    ///
    /// Returns `BackplanError::InvalidInput` unless the deletion is confirmed
    /// and `BackplanError::RecipeNotFound` if the recipe does not exist.
    pub async fn delete_recipe(&self, params: &DeleteRecipe) -> Result<()> {
        if !params.confirmed {
            return Err(BackplanError::invalid_input("confirmed")
                .with_reason("Deleting a recipe must be confirmed"));
        }

        let id = params.id;
        self.with_database(move |db| db.delete_recipe(id)).await?;
        info!("Deleted recipe {id}");
        Ok(())
    }
}
