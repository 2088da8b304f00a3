//! High-level recipe library API.
//!
//! The [`Library`] is the caller the scheduling engine expects: it loads
//! recipes from storage, keeps one anchor instant and one completion set per
//! recipe, and recomputes the timeline on every read.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Library      │    │    schedule     │    │    Database     │
//! │ (recipe_ops,    │───▶│ (pure engine)   │    │   (via db/)     │
//! │  bake_ops)      │───────────────────────────▶│                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Library`] instances
//! - [`recipe_ops`]: Adding, listing, showing and deleting recipes
//! - [`bake_ops`]: Planning, tracking and cancelling bakes
//!
//! Every operation takes "now" from the caller where time matters, so the
//! same calls drive the CLI and deterministic tests.
//!
//! # Usage
//!
//! ```rust,no_run
//! use backplan_core::{params::{CreateRecipe, StartBake}, schedule::Anchor, LibraryBuilder};
//! use jiff::Timestamp;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let library = LibraryBuilder::new()
//!     .with_database_path(Some("/tmp/backplan.db"))
//!     .build()
//!     .await?;
//!
//! let doc = std::fs::read_to_string("roggenbrot.json")?;
//! let imported = library.add_recipe(&serde_json::from_str::<CreateRecipe>(&doc)?).await?;
//!
//! let finish_by: Timestamp = "2030-01-01T07:00:00Z".parse()?;
//! let report = library
//!     .start_bake(
//!         &StartBake { recipe_id: imported.recipe.id, anchor: Anchor::FinishBy(finish_by) },
//!         Timestamp::now(),
//!     )
//!     .await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::Result,
};

pub mod bake_ops;
pub mod builder;
pub mod recipe_ops;


pub use builder::LibraryBuilder;

/// Main interface for managing recipes and their bakes.
pub struct Library {
    pub(crate) db_path: PathBuf,
}

impl Library {
    /// Creates a new library with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Runs a database job on the blocking pool with a fresh connection.
    async fn with_database<T, F>(&self, job: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            job(&mut db)
        })
        .await?
    }
}
