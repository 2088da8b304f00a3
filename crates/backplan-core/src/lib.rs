//! Core library for the Backplan bread-baking planner.
//!
//! Backplan stores multi-phase bread recipes and plans a bake around one
//! moment, usually "the bread must be ready by 07:00". The interesting part
//! is the [`schedule`] engine: it walks a recipe's phases backwards from the
//! finish, lets pre-ferments and soakers run alongside the main dough, and
//! then tracks the live bake step by step.
//!
//! # Layers
//!
//! - [`schedule`]: the pure scheduling engine; no I/O, `now` is a parameter
//! - [`models`]: recipes, phases, steps and bake sessions
//! - [`library`]: SQLite-backed recipe library that stores one anchor and
//!   one completion set per recipe and recomputes timelines on read
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use backplan_core::{
//!     models::{Phase, Step, StepKind},
//!     schedule::{compute_timeline, query_progress, CompletionSet},
//! };
//! use jiff::Timestamp;
//!
//! let phases = vec![
//!     Phase::parallel("Starter", vec![Step::new("Ferment", StepKind::Wait, 240)]),
//!     Phase::sequential(
//!         "Hauptteig",
//!         vec![
//!             Step::new("Mix", StepKind::Action, 10),
//!             Step::new("Proof", StepKind::Wait, 60),
//!             Step::new("Bake", StepKind::Bake, 30),
//!         ],
//!     ),
//! ];
//!
//! let ready: Timestamp = "2024-05-04T12:00:00Z".parse().unwrap();
//! let timeline = compute_timeline(&phases, ready).unwrap();
//! assert_eq!(timeline[0].start, "2024-05-04T06:20:00Z".parse().unwrap());
//!
//! let now: Timestamp = "2024-05-04T10:25:00Z".parse().unwrap();
//! let progress = query_progress(&timeline, now, &CompletionSet::new());
//! assert_eq!(progress.active, Some(1));
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod library;
pub mod models;
pub mod params;
pub mod schedule;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreateResult, DeleteResult, Estimate, OperationStatus, RecipeSummaries};
pub use error::{BackplanError, MalformedStep, Result, ScheduleError};
pub use library::{Library, LibraryBuilder};
pub use models::{
    BakeReport, BakeSession, ImportedRecipe, Phase, RawPhase, RawStep, Recipe, RecipeSummary,
    Step, StepKind, StepState,
};
pub use params::{CreateRecipe, DeleteRecipe, Id, StartBake, ToggleStep};
pub use schedule::{
    compute_timeline, estimate_total_minutes, query_progress, toggle_completion,
    validate_finish_time, Anchor, CompletionSet, Progress, Timeline, TimelineEntry,
};
