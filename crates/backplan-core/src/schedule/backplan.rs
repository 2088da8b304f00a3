//! Reverse scheduler: resolves a phase list into absolute step intervals.
//!
//! Sequential phases form one chain ending at the finish instant. Parallel
//! phases (starters, soakers) hang off that chain: each has to be finished
//! by the time the next sequential phase after it starts, and may start as
//! early as it needs to. The walk runs backwards from the finish, phase by
//! phase and step by step, in whole minutes before the finish; only then are
//! the offsets turned into instants.

use std::{cmp::Reverse, ops::Index};

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

use super::PhaseKind;
use crate::{
    error::{Result, TimeResultExt},
    models::{Phase, StepKind},
};

/// The single fixed point a bake is planned around.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "at", rename_all = "snake_case")]
pub enum Anchor {
    /// Start right away; the instant is when "now" was taken
    Now(Timestamp),
    /// Start at a chosen instant
    StartAt(Timestamp),
    /// Be done by a chosen instant
    FinishBy(Timestamp),
}

impl Anchor {
    /// The instant the baker picked, whatever its meaning.
    pub fn instant(&self) -> Timestamp {
        match *self {
            Anchor::Now(at) | Anchor::StartAt(at) | Anchor::FinishBy(at) => at,
        }
    }

    /// Storage name of the anchor kind.
    pub fn kind_str(&self) -> &'static str {
        match self {
            Anchor::Now(_) => "now",
            Anchor::StartAt(_) => "start_at",
            Anchor::FinishBy(_) => "finish_by",
        }
    }

    /// Rebuilds an anchor from its storage name and instant.
    pub fn from_parts(kind: &str, at: Timestamp) -> Option<Self> {
        match kind {
            "now" => Some(Anchor::Now(at)),
            "start_at" => Some(Anchor::StartAt(at)),
            "finish_by" => Some(Anchor::FinishBy(at)),
            _ => None,
        }
    }

    /// Reduces the anchor to the instant the last phase ends.
    ///
    /// Forward anchors add the schedule span, so the earliest step of the
    /// resulting timeline starts exactly at the anchor.
    pub fn finish_time(&self, phases: &[Phase]) -> Result<Timestamp> {
        match *self {
            Anchor::FinishBy(at) => Ok(at),
            Anchor::Now(at) | Anchor::StartAt(at) => {
                at.checked_add(minutes(schedule_span_minutes(phases)))
                    .out_of_range()
            }
        }
    }
}

/// One step resolved to absolute time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineEntry {
    /// Position of the owning phase in the recipe
    pub phase_index: usize,
    /// Position of the step within its phase
    pub step_index: usize,
    pub phase_name: String,
    pub instruction: String,
    pub kind: StepKind,
    pub duration_minutes: u32,
    pub start: Timestamp,
    pub end: Timestamp,
    pub is_parallel: bool,
}

impl TimelineEntry {
    /// Fraction of the step elapsed at `now`, clamped to `0.0..=1.0`.
    ///
    /// Zero-length steps report `1.0`.
    pub fn progress_at(&self, now: Timestamp) -> f64 {
        let total = self.end.duration_since(self.start).as_secs_f64();
        if total <= 0.0 {
            return 1.0;
        }
        (now.duration_since(self.start).as_secs_f64() / total).clamp(0.0, 1.0)
    }
}

/// Chronologically ordered list of resolved steps.
///
/// Indices into a timeline are stable for a given phase list, which is what
/// completion sets refer to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Timeline(pub Vec<TimelineEntry>);

impl Timeline {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&TimelineEntry> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimelineEntry> {
        self.0.iter()
    }

    /// Start of the earliest step.
    pub fn starts_at(&self) -> Option<Timestamp> {
        self.0.first().map(|entry| entry.start)
    }

    /// End of the latest step.
    pub fn ends_at(&self) -> Option<Timestamp> {
        self.0.iter().map(|entry| entry.end).max()
    }
}

impl Index<usize> for Timeline {
    type Output = TimelineEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Timeline {
    type Item = TimelineEntry;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEntry;
    type IntoIter = std::slice::Iter<'a, TimelineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A step placed relative to the finish, in minutes before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    phase_index: usize,
    step_index: usize,
    start_before: u64,
    end_before: u64,
}

/// Backward pass over the phase list, sorted by ascending start.
fn backward_slots(phases: &[Phase]) -> Vec<Slot> {
    // Where the main chain currently starts. It is also the point any
    // parallel phase met earlier in authored order must be done by.
    let mut sync_point = 0u64;
    let mut slots = Vec::new();

    for (phase_index, phase) in phases.iter().enumerate().rev() {
        let mut local = sync_point;
        for (step_index, step) in phase.steps.iter().enumerate().rev() {
            let end_before = local;
            let start_before = end_before + u64::from(step.duration_minutes);
            slots.push(Slot {
                phase_index,
                step_index,
                start_before,
                end_before,
            });
            local = start_before;
        }

        if phase.kind() == PhaseKind::Sequential {
            sync_point = local;
        }
    }

    // Back to authored order first so the stable sort keeps it for ties.
    slots.reverse();
    slots.sort_by_key(|slot| Reverse(slot.start_before));
    slots
}

/// Minutes from the earliest step start to the finish.
///
/// This is the length of the real schedule, unlike
/// [`super::estimate_total_minutes`].
pub fn schedule_span_minutes(phases: &[Phase]) -> u64 {
    backward_slots(phases)
        .iter()
        .map(|slot| slot.start_before)
        .max()
        .unwrap_or(0)
}

/// Computes the absolute timeline of a phase list finishing at `finish_at`.
///
/// # Errors
///
/// Returns `BackplanError::TimeOutOfRange` if a step would start before the
/// earliest representable instant.
///
/// # Examples
///
/// ```rust
/// use backplan_core::{
///     models::{Phase, Step, StepKind},
///     schedule::compute_timeline,
/// };
/// use jiff::Timestamp;
///
/// let phases = vec![Phase::sequential(
///     "Hauptteig",
///     vec![Step::new("Mix", StepKind::Action, 10), Step::new("Bake", StepKind::Bake, 45)],
/// )];
/// let finish: Timestamp = "2024-05-04T12:00:00Z".parse().unwrap();
/// let timeline = compute_timeline(&phases, finish).unwrap();
/// assert_eq!(timeline[0].start, "2024-05-04T11:05:00Z".parse().unwrap());
/// assert_eq!(timeline[1].end, finish);
/// ```
pub fn compute_timeline(phases: &[Phase], finish_at: Timestamp) -> Result<Timeline> {
    let entries = backward_slots(phases)
        .into_iter()
        .map(|slot| {
            let phase = &phases[slot.phase_index];
            let step = &phase.steps[slot.step_index];
            Ok(TimelineEntry {
                phase_index: slot.phase_index,
                step_index: slot.step_index,
                phase_name: phase.name.clone(),
                instruction: step.instruction.clone(),
                kind: step.kind,
                duration_minutes: step.duration_minutes,
                start: finish_at
                    .checked_sub(minutes(slot.start_before))
                    .out_of_range()?,
                end: finish_at
                    .checked_sub(minutes(slot.end_before))
                    .out_of_range()?,
                is_parallel: phase.is_parallel,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Timeline(entries))
}

fn minutes(count: u64) -> SignedDuration {
    // Far beyond jiff's range either way; keeps from_mins from overflowing.
    let count = i64::try_from(count).unwrap_or(i64::MAX).min(i64::MAX / 60);
    SignedDuration::from_mins(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Step;

    fn at(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn hauptteig() -> Phase {
        Phase::sequential(
            "Hauptteig",
            vec![
                Step::new("Mix", StepKind::Action, 10),
                Step::new("Rest", StepKind::Wait, 90),
                Step::new("Bake", StepKind::Bake, 45),
            ],
        )
    }

    fn starter() -> Phase {
        Phase::parallel(
            "Starter",
            vec![
                Step::new("Feed", StepKind::Action, 5),
                Step::new("Ferment", StepKind::Wait, 235),
            ],
        )
    }

    fn short_hauptteig() -> Phase {
        Phase::sequential(
            "Hauptteig",
            vec![
                Step::new("Mix", StepKind::Action, 10),
                Step::new("Proof", StepKind::Wait, 60),
                Step::new("Bake", StepKind::Bake, 30),
            ],
        )
    }

    #[test]
    fn test_single_sequential_phase() {
        let timeline = compute_timeline(&[hauptteig()], at("2024-05-04T12:00:00Z")).unwrap();

        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline[0].instruction, "Mix");
        assert_eq!(timeline[0].start, at("2024-05-04T09:35:00Z"));
        assert_eq!(timeline[0].end, at("2024-05-04T09:45:00Z"));
        assert_eq!(timeline[1].instruction, "Rest");
        assert_eq!(timeline[1].start, at("2024-05-04T09:45:00Z"));
        assert_eq!(timeline[1].end, at("2024-05-04T11:15:00Z"));
        assert_eq!(timeline[2].instruction, "Bake");
        assert_eq!(timeline[2].start, at("2024-05-04T11:15:00Z"));
        assert_eq!(timeline[2].end, at("2024-05-04T12:00:00Z"));
    }

    #[test]
    fn test_parallel_phase_finishes_at_sync_point() {
        let timeline =
            compute_timeline(&[starter(), short_hauptteig()], at("2024-05-04T12:00:00Z")).unwrap();

        let starter_entries: Vec<_> = timeline.iter().filter(|e| e.is_parallel).collect();
        let main_entries: Vec<_> = timeline.iter().filter(|e| !e.is_parallel).collect();

        assert_eq!(main_entries[0].start, at("2024-05-04T10:20:00Z"));
        assert_eq!(main_entries[2].end, at("2024-05-04T12:00:00Z"));
        assert_eq!(starter_entries[0].start, at("2024-05-04T06:20:00Z"));
        assert_eq!(starter_entries[1].end, at("2024-05-04T10:20:00Z"));

        // Chronological order puts the starter first.
        assert_eq!(timeline[0].phase_name, "Starter");
        assert_eq!(timeline[0].phase_index, 0);
        assert_eq!(timeline[2].phase_index, 1);
    }

    #[test]
    fn test_parallel_phases_sharing_sync_point_are_independent() {
        let soaker = Phase::parallel("Soaker", vec![Step::new("Soak", StepKind::Wait, 60)]);
        let timeline = compute_timeline(
            &[starter(), soaker, short_hauptteig()],
            at("2024-05-04T12:00:00Z"),
        )
        .unwrap();

        let soak = timeline.iter().find(|e| e.instruction == "Soak").unwrap();
        let ferment = timeline.iter().find(|e| e.instruction == "Ferment").unwrap();
        assert_eq!(soak.end, ferment.end);
        assert_eq!(soak.start, at("2024-05-04T09:20:00Z"));
        assert_eq!(ferment.start, at("2024-05-04T06:25:00Z"));
    }

    #[test]
    fn test_trailing_parallel_phase_ends_at_finish() {
        let cooling = Phase::parallel("Cool", vec![Step::new("Cool", StepKind::Wait, 20)]);
        let timeline =
            compute_timeline(&[short_hauptteig(), cooling], at("2024-05-04T12:00:00Z")).unwrap();

        let cool = timeline.iter().find(|e| e.phase_name == "Cool").unwrap();
        assert_eq!(cool.end, at("2024-05-04T12:00:00Z"));
        assert_eq!(timeline.ends_at(), Some(at("2024-05-04T12:00:00Z")));
    }

    #[test]
    fn test_empty_inputs() {
        let finish = at("2024-05-04T12:00:00Z");
        assert!(compute_timeline(&[], finish).unwrap().is_empty());

        let empty = Phase::sequential("Leer", vec![]);
        let timeline = compute_timeline(&[hauptteig(), empty], finish).unwrap();
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline[2].end, finish);
    }

    #[test]
    fn test_zero_duration_steps_keep_authored_order() {
        let phase = Phase::sequential(
            "Hauptteig",
            vec![
                Step::new("Preheat", StepKind::Action, 0),
                Step::new("Bake", StepKind::Bake, 30),
            ],
        );
        let timeline = compute_timeline(&[phase], at("2024-05-04T12:00:00Z")).unwrap();

        assert_eq!(timeline[0].instruction, "Preheat");
        assert_eq!(timeline[0].start, timeline[0].end);
        assert_eq!(timeline[0].end, timeline[1].start);
    }

    #[test]
    fn test_span_and_forward_anchors() {
        let phases = vec![starter(), short_hauptteig()];
        assert_eq!(schedule_span_minutes(&phases), 340);

        let start = at("2024-05-04T06:00:00Z");
        let finish = Anchor::StartAt(start).finish_time(&phases).unwrap();
        assert_eq!(finish, at("2024-05-04T11:40:00Z"));

        let timeline = compute_timeline(&phases, finish).unwrap();
        assert_eq!(timeline.starts_at(), Some(start));

        let finish_by = at("2024-05-04T07:00:00Z");
        assert_eq!(
            Anchor::FinishBy(finish_by).finish_time(&phases).unwrap(),
            finish_by
        );
        assert_eq!(Anchor::Now(start).finish_time(&[]).unwrap(), start);
    }

    #[test]
    fn test_anchor_parts_roundtrip() {
        let instant = at("2024-05-04T07:00:00Z");
        for anchor in [
            Anchor::Now(instant),
            Anchor::StartAt(instant),
            Anchor::FinishBy(instant),
        ] {
            assert_eq!(Anchor::from_parts(anchor.kind_str(), instant), Some(anchor));
        }
        assert_eq!(Anchor::from_parts("whenever", instant), None);
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        let phase = Phase::sequential(
            "Forever",
            vec![Step::new("Wait", StepKind::Wait, u32::MAX); 4],
        );
        let result = compute_timeline(&[phase], at("2024-05-04T12:00:00Z"));
        assert!(matches!(
            result,
            Err(crate::BackplanError::TimeOutOfRange { .. })
        ));
    }

    #[test]
    fn test_entry_progress() {
        let timeline = compute_timeline(&[hauptteig()], at("2024-05-04T12:00:00Z")).unwrap();
        let rest = &timeline[1];

        assert_eq!(rest.progress_at(at("2024-05-04T09:00:00Z")), 0.0);
        assert_eq!(rest.progress_at(at("2024-05-04T10:30:00Z")), 0.5);
        assert_eq!(rest.progress_at(at("2024-05-04T13:00:00Z")), 1.0);
    }
}
