//! Bake operations for the Library.
//!
//! Only the anchor and the explicit completions are stored. Every read
//! recomputes the timeline from the recipe and the stored anchor.

use jiff::Timestamp;
use log::{debug, info};

use super::Library;
use crate::{
    error::{BackplanError, Result},
    models::{BakeReport, BakeSession, Recipe},
    params::{Id, StartBake, ToggleStep},
    schedule::{self, toggle_completion},
};

impl Library {
    /// Plans a bake of a recipe and stores its anchor.
    ///
    /// Any previous bake of the same recipe is replaced and its completions
    /// are dropped.
    ///
    /// # Errors
    ///
    /// * `BackplanError::RecipeNotFound` if the recipe does not exist
    /// * `BackplanError::Schedule` if a finish-by anchor is in the past or
    ///   leaves too little lead time
    pub async fn start_bake(&self, params: &StartBake, now: Timestamp) -> Result<BakeReport> {
        let recipe = self.require_recipe(params.recipe_id).await?;
        let anchor = params.anchor;

        let timeline = schedule::plan(&recipe.phases, &anchor, now)?;
        let finish_at = anchor.finish_time(&recipe.phases)?;

        let recipe_id = recipe.id;
        let session = self
            .with_database(move |db| db.save_session(recipe_id, &anchor, now))
            .await?;

        info!(
            "Planned bake of recipe {recipe_id} ({}), finishing at {finish_at}",
            anchor.kind_str()
        );
        Ok(BakeReport::from_timeline(&recipe, &session, timeline, finish_at, now))
    }

    /// Reports on the bake of a recipe at `now`.
    ///
    /// # Errors
    ///
    /// Returns `BackplanError::NoActiveBake` if no bake is planned.
    pub async fn bake_status(&self, params: &Id, now: Timestamp) -> Result<BakeReport> {
        let (recipe, session) = self.load_bake(params.id).await?;
        BakeReport::build(&recipe, &session, now)
    }

    /// Toggles a step's completion and reports on the bake afterwards.
    ///
    /// Only done steps (undo) and the active step (finish early) can be
    /// toggled; other indices leave the bake unchanged. The session is read
    /// and written back under one write lock, so a bake planned meanwhile
    /// never inherits completions meant for the old timeline.
    pub async fn toggle_step(&self, params: &ToggleStep, now: Timestamp) -> Result<BakeReport> {
        let (recipe_id, index) = (params.recipe_id, params.index);
        self.with_database(move |db| {
            db.immediate(|db| {
                let recipe = db
                    .get_recipe(recipe_id)?
                    .ok_or(BackplanError::RecipeNotFound { id: recipe_id })?;
                let mut session = db
                    .get_session(recipe_id)?
                    .ok_or(BackplanError::NoActiveBake { recipe_id })?;
                let report = BakeReport::build(&recipe, &session, now)?;

                let completed = toggle_completion(&session.completed, index, &report.timeline, now);
                if completed == session.completed {
                    debug!("Toggle of step {index} in recipe {recipe_id} changed nothing");
                    return Ok(report);
                }

                db.write_completed(recipe_id, &completed)?;
                session.completed = completed;
                Ok(BakeReport::from_timeline(
                    &recipe,
                    &session,
                    report.timeline,
                    report.finish_at,
                    now,
                ))
            })
        })
        .await
    }

    /// Cancels the bake of a recipe.
    ///
    /// # Errors
    ///
    /// Returns `BackplanError::NoActiveBake` if no bake is planned.
    pub async fn cancel_bake(&self, params: &Id) -> Result<()> {
        let recipe_id = params.id;
        let existed = self
            .with_database(move |db| db.delete_session(recipe_id))
            .await?;
        if !existed {
            return Err(BackplanError::NoActiveBake { recipe_id });
        }
        info!("Cancelled bake of recipe {recipe_id}");
        Ok(())
    }

    async fn require_recipe(&self, id: u64) -> Result<Recipe> {
        self.get_recipe(&Id { id })
            .await?
            .ok_or(BackplanError::RecipeNotFound { id })
    }

    async fn load_bake(&self, recipe_id: u64) -> Result<(Recipe, BakeSession)> {
        let recipe = self.require_recipe(recipe_id).await?;
        let session = self
            .with_database(move |db| db.get_session(recipe_id))
            .await?
            .ok_or(BackplanError::NoActiveBake { recipe_id })?;
        Ok((recipe, session))
    }
}
