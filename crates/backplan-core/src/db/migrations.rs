//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Cascading deletes rely on this, and it is per connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Early databases had no source_url column
        let has_source_url: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('recipes') WHERE name = 'source_url'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_source_url {
            self.connection
                .execute("ALTER TABLE recipes ADD COLUMN source_url TEXT", [])
                .db_context("Failed to add source_url column to recipes table")?;
        }

        Ok(())
    }
}
