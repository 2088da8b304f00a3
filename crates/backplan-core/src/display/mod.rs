//! Display formatting for recipes, timelines and bake reports.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here cover collections, operation results and small value
//! types such as durations and countdowns. Everything renders as markdown.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (RecipeSummaries)
//! - [`results`]: Operation result types (CreateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Time, duration, countdown and percentage formatting
//! - [`estimate`]: Duration overview of a recipe
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use backplan_core::display::{Countdown, Minutes, OperationStatus};
//!
//! assert_eq!(format!("{}", Minutes(145)), "2 h 25 min");
//! assert_eq!(format!("{}", Countdown(59)), "00:00:59");
//! println!("{}", OperationStatus::success("Bake cancelled".to_string()));
//! ```

pub mod collections;
pub mod datetime;
pub mod estimate;
pub mod models;
pub mod results;
pub mod status;

pub use collections::RecipeSummaries;
pub use datetime::{Countdown, LocalDateTime, LocalTime, Minutes, Percent};
pub use estimate::Estimate;
pub use results::{CreateResult, DeleteResult};
pub use status::OperationStatus;
