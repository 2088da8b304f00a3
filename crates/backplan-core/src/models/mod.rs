//! Data models for recipes, phases, steps and bake sessions.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping presentation out of the data
//! structures.
//!
//! # Examples
//!
//! ```rust
//! use backplan_core::models::{Phase, Step, StepKind};
//!
//! let phase = Phase::sequential(
//!     "Hauptteig",
//!     vec![
//!         Step::new("Mix", StepKind::Action, 10),
//!         Step::new("Rest", StepKind::Wait, 90),
//!         Step::new("Bake", StepKind::Bake, 45),
//!     ],
//! );
//! assert_eq!(phase.total_minutes(), 145);
//! assert!(Phase::infer_parallel("Sauerteig (Vorteig)"));
//! ```

pub mod phase;
pub mod raw;
pub mod recipe;
pub mod report;
pub mod session;
pub mod status;
pub mod step;
pub mod summary;


pub use phase::Phase;
pub use raw::{RawPhase, RawStep};
pub use recipe::Recipe;
pub use report::{BakeReport, ImportedRecipe};
pub use session::BakeSession;
pub use status::{StepKind, StepState};
pub use step::Step;
pub use summary::RecipeSummary;
