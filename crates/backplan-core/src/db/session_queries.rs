//! Bake session storage: one anchor and a completion set per recipe.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use super::utils::{id_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::BakeSession,
    schedule::{Anchor, CompletionSet},
};

const DELETE_SESSION_SQL: &str = "DELETE FROM bake_sessions WHERE recipe_id = ?1";
const INSERT_SESSION_SQL: &str = "INSERT INTO bake_sessions (recipe_id, anchor_kind, anchor_at, created_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_SESSION_SQL: &str =
    "SELECT recipe_id, anchor_kind, anchor_at, created_at FROM bake_sessions WHERE recipe_id = ?1";
const SELECT_COMPLETED_SQL: &str =
    "SELECT step_index FROM completed_steps WHERE recipe_id = ?1 ORDER BY step_index";
const DELETE_COMPLETED_SQL: &str = "DELETE FROM completed_steps WHERE recipe_id = ?1";
const INSERT_COMPLETED_SQL: &str =
    "INSERT INTO completed_steps (recipe_id, step_index) VALUES (?1, ?2)";

impl super::Database {
    /// Starts a fresh bake session, replacing any previous one for the recipe.
    pub fn save_session(
        &mut self,
        recipe_id: u64,
        anchor: &Anchor,
        created_at: Timestamp,
    ) -> Result<BakeSession> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_COMPLETED_SQL, params![recipe_id as i64])
            .db_context("Failed to clear completed steps")?;
        tx.execute(DELETE_SESSION_SQL, params![recipe_id as i64])
            .db_context("Failed to clear previous bake session")?;
        tx.execute(
            INSERT_SESSION_SQL,
            params![
                recipe_id as i64,
                anchor.kind_str(),
                anchor.instant().to_string(),
                created_at.to_string()
            ],
        )
        .db_context("Failed to insert bake session")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(BakeSession {
            recipe_id,
            anchor: *anchor,
            completed: CompletionSet::new(),
            created_at,
        })
    }

    /// Loads the bake session of a recipe, including its completion set.
    pub fn get_session(&self, recipe_id: u64) -> Result<Option<BakeSession>> {
        let session = self
            .connection
            .query_row(SELECT_SESSION_SQL, params![recipe_id as i64], |row| {
                let kind: String = row.get(1)?;
                let at = timestamp_column(row, 2)?;
                let anchor = Anchor::from_parts(&kind, at).ok_or_else(|| {
                    rusqlite::Error::FromSqlConversionFailure(
                        1,
                        Type::Text,
                        Box::new(std::io::Error::new(
                            std::io::ErrorKind::InvalidData,
                            format!("Invalid anchor kind: {kind}"),
                        )),
                    )
                })?;

                Ok(BakeSession {
                    recipe_id: id_column(row, 0)?,
                    anchor,
                    completed: CompletionSet::new(),
                    created_at: timestamp_column(row, 3)?,
                })
            })
            .optional()
            .db_context("Failed to query bake session")?;

        match session {
            Some(mut session) => {
                session.completed = self.get_completed(recipe_id)?;
                Ok(Some(session))
            }
            None => Ok(None),
        }
    }

    /// Replaces the stored completion set of a recipe's bake session.
    pub fn save_completed(&mut self, recipe_id: u64, completed: &CompletionSet) -> Result<()> {
        self.immediate(|db| db.write_completed(recipe_id, completed))
    }

    /// Writes a completion set without opening a transaction of its own.
    pub(crate) fn write_completed(&self, recipe_id: u64, completed: &CompletionSet) -> Result<()> {
        self.connection
            .execute(DELETE_COMPLETED_SQL, params![recipe_id as i64])
            .db_context("Failed to clear completed steps")?;
        for index in completed.iter() {
            self.connection
                .execute(
                    INSERT_COMPLETED_SQL,
                    params![recipe_id as i64, index as i64],
                )
                .db_context("Failed to insert completed step")?;
        }
        Ok(())
    }

    /// Removes a recipe's bake session. Returns whether one existed.
    pub fn delete_session(&mut self, recipe_id: u64) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_SESSION_SQL, params![recipe_id as i64])
            .db_context("Failed to delete bake session")?;
        Ok(deleted > 0)
    }

    fn get_completed(&self, recipe_id: u64) -> Result<CompletionSet> {
        let mut stmt = self
            .connection
            .prepare(SELECT_COMPLETED_SQL)
            .db_context("Failed to prepare query")?;

        let indices = stmt
            .query_map(params![recipe_id as i64], |row| row.get::<_, i64>(0))
            .db_context("Failed to query completed steps")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read completed step")?;

        Ok(indices
            .into_iter()
            .filter_map(|index| usize::try_from(index).ok())
            .collect())
    }
}
