//! Opening a recipe library: where the database lives and making sure it exists.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Library;
use crate::{
    db::Database,
    error::{BackplanError, Result},
};

/// Resolves the database location, then creates the schema once before
/// handing out a [`Library`].
#[derive(Debug, Clone)]
pub struct LibraryBuilder {
    database_path: Option<PathBuf>,
}

impl LibraryBuilder {
    /// Starts with the XDG data location.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Overrides the database file. `None` keeps
    /// `$XDG_DATA_HOME/backplan/backplan.db`, usually
    /// `~/.local/share/backplan/backplan.db`.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Creates missing parent directories and the schema.
    ///
    /// # Errors
    ///
    /// `BackplanError::FileSystem` when the directory cannot be created,
    /// `BackplanError::Database` when the schema or a migration fails.
    pub async fn build(self) -> Result<Library> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BackplanError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening recipe library at {}", db_path.display());

        let schema_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&schema_path).map(drop)).await??;

        Ok(Library::new(db_path))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("backplan")
            .place_data_file("backplan.db")
            .map_err(|e| BackplanError::XdgDirectory(e.to_string()))
    }
}

impl Default for LibraryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
