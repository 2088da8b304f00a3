//! Recipe CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::utils::{id_column, phases_column, timestamp_column};
use crate::{
    error::{BackplanError, DatabaseResultExt, Result},
    models::{Phase, Recipe, RecipeSummary},
};

const INSERT_RECIPE_SQL: &str = "INSERT INTO recipes (title, description, source_url, phases, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_RECIPE_SQL: &str = "SELECT id, title, description, source_url, phases, created_at, updated_at FROM recipes WHERE id = ?1";
const LIST_RECIPES_SQL: &str = "SELECT r.id, r.title, r.description, r.source_url, r.phases, r.created_at, r.updated_at, s.recipe_id IS NOT NULL FROM recipes r LEFT JOIN bake_sessions s ON s.recipe_id = r.id ORDER BY r.id";
const DELETE_RECIPE_SQL: &str = "DELETE FROM recipes WHERE id = ?1";

fn recipe_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Recipe> {
    Ok(Recipe {
        id: id_column(row, 0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        source_url: row.get(3)?,
        phases: phases_column(row, 4)?,
        created_at: timestamp_column(row, 5)?,
        updated_at: timestamp_column(row, 6)?,
    })
}

impl super::Database {
    /// Stores a new recipe with an already normalized phase list.
    pub fn create_recipe(
        &mut self,
        title: &str,
        description: Option<&str>,
        source_url: Option<&str>,
        phases: &[Phase],
    ) -> Result<Recipe> {
        let phases_json = serde_json::to_string(phases)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_RECIPE_SQL,
            params![
                title,
                description,
                source_url,
                phases_json,
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert recipe")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Recipe {
            id,
            title: title.into(),
            description: description.map(String::from),
            source_url: source_url.map(String::from),
            phases: phases.to_vec(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a recipe by its ID.
    pub fn get_recipe(&self, id: u64) -> Result<Option<Recipe>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_RECIPE_SQL)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id as i64], recipe_from_row)
            .optional()
            .db_context("Failed to query recipe")
    }

    /// Lists all recipes as summaries, oldest first.
    pub fn list_recipes(&self) -> Result<Vec<RecipeSummary>> {
        let mut stmt = self
            .connection
            .prepare(LIST_RECIPES_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], |row| {
                let recipe = recipe_from_row(row)?;
                let has_active_bake: bool = row.get(7)?;
                Ok(RecipeSummary::from_recipe(&recipe, has_active_bake))
            })
            .db_context("Failed to query recipes")?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read recipe row")
    }

    /// Permanently deletes a recipe together with its bake session.
    pub fn delete_recipe(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_RECIPE_SQL, params![id as i64])
            .db_context("Failed to delete recipe")?;

        if deleted == 0 {
            return Err(BackplanError::RecipeNotFound { id });
        }
        Ok(())
    }
}
