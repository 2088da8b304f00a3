//! The backplan scheduling engine.
//!
//! Given a recipe's phases and one anchor instant, the engine resolves every
//! step to absolute wall-clock time and answers live progress queries. It is
//! synchronous and keeps no state: "now" is always passed in, and a timeline
//! is recomputed from scratch whenever the anchor or the phases change.
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │   duration   │──▶│  aggregate   │──▶│   backplan   │──▶│   progress   │
//! │ (raw → Step) │   │ (totals,kind)│   │ (Timeline)   │   │ (per tick)   │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//!                           │
//!                           ▼
//!                    ┌──────────────┐
//!                    │   validate   │
//!                    └──────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`duration`]: normalizes imported steps, never fails
//! - [`aggregate`]: phase totals, classification and the total estimate
//! - [`backplan`]: anchors, the reverse scheduler and [`Timeline`]
//! - [`progress`]: active/next step, countdowns and completion toggling
//! - [`validate`]: feasibility of a "finish by" instant

use jiff::Timestamp;

use crate::{error::Result, models::Phase};

pub mod aggregate;
pub mod backplan;
pub mod duration;
pub mod progress;
pub mod validate;

pub use aggregate::{estimate_total_minutes, PhaseKind};
pub use backplan::{compute_timeline, schedule_span_minutes, Anchor, Timeline, TimelineEntry};
pub use duration::{normalize_phases, normalize_step, Normalized};
pub use progress::{query_progress, toggle_completion, CompletionSet, Progress};
pub use validate::validate_finish_time;

/// Plans a bake: validates "finish by" anchors, then computes the timeline.
///
/// # Errors
///
/// Returns `BackplanError::Schedule` when a finish-by anchor is infeasible
/// and `BackplanError::TimeOutOfRange` when the schedule leaves jiff's range.
pub fn plan(phases: &[Phase], anchor: &Anchor, now: Timestamp) -> Result<Timeline> {
    if let Anchor::FinishBy(finish_at) = *anchor {
        validate_finish_time(finish_at, now, phases)?;
    }
    compute_timeline(phases, anchor.finish_time(phases)?)
}
