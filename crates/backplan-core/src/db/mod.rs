//! Database operations and SQLite management for recipes and bake sessions.
//!
//! This module provides low-level database operations for the recipe
//! library. It handles SQLite connections, schema management, and query
//! interfaces for recipes and the per-recipe bake state.

use std::path::Path;

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod recipe_queries;
pub mod session_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Runs `job` in one immediate transaction, committing only if it succeeds.
    ///
    /// The write lock is taken before `job` reads anything, so no other
    /// connection can change the rows it reads before it writes.
    pub fn immediate<T>(&self, job: impl FnOnce(&Self) -> Result<T>) -> Result<T> {
        let tx = Transaction::new_unchecked(&self.connection, TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;
        let value = job(self)?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tempfile::TempDir;

    use super::*;
    use crate::{
        error::BackplanError,
        models::{Phase, Step, StepKind},
        schedule::{Anchor, CompletionSet},
    };

    fn open(dir: &TempDir) -> Database {
        Database::new(dir.path().join("backplan.db")).unwrap()
    }

    #[test]
    fn test_immediate_locks_out_other_writers() {
        let temp_dir = TempDir::new().unwrap();
        let db = open(&temp_dir);
        let other = open(&temp_dir);
        other.connection.busy_timeout(Duration::ZERO).unwrap();

        db.immediate(|_| {
            let blocked = other.connection.execute("DELETE FROM completed_steps", []);
            assert!(blocked.is_err());
            Ok(())
        })
        .unwrap();

        assert!(other
            .connection
            .execute("DELETE FROM completed_steps", [])
            .is_ok());
    }

    #[test]
    fn test_immediate_rolls_back_a_failed_job() {
        let temp_dir = TempDir::new().unwrap();
        let mut db = open(&temp_dir);
        let phases = vec![Phase::sequential(
            "Hauptteig",
            vec![Step::new("Mix", StepKind::Action, 10)],
        )];
        let recipe = db.create_recipe("Weizenbrot", None, None, &phases).unwrap();
        let now = "2024-05-04T08:00:00Z".parse().unwrap();
        db.save_session(recipe.id, &Anchor::Now(now), now).unwrap();

        let result: Result<()> = db.immediate(|db| {
            db.write_completed(recipe.id, &[0].into_iter().collect())?;
            Err(BackplanError::NoActiveBake {
                recipe_id: recipe.id,
            })
        });

        assert!(result.is_err());
        let session = db.get_session(recipe.id).unwrap().unwrap();
        assert_eq!(session.completed, CompletionSet::new());
    }
}
