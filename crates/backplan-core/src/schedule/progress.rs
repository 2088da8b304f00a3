//! Forward progress tracking over a computed timeline.
//!
//! Everything here is a pure function of `(timeline, now, completed)`, so a
//! caller can poll it once per second from any clock it likes and tests can
//! pin `now` to whatever instant they need.

use std::collections::BTreeSet;

use jiff::Timestamp;
use log::debug;
use serde::{Deserialize, Serialize};

use super::Timeline;
use crate::models::StepState;

/// Timeline indices the baker explicitly marked as complete.
///
/// Steps whose end has passed count as done without being stored here, so
/// in practice the set only holds steps finished early.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CompletionSet(BTreeSet<usize>);

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    fn with(&self, index: usize) -> Self {
        let mut set = self.0.clone();
        set.insert(index);
        Self(set)
    }

    fn without(&self, index: usize) -> Self {
        let mut set = self.0.clone();
        set.remove(&index);
        Self(set)
    }
}

impl FromIterator<usize> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Snapshot of a bake at one instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Progress {
    /// Step running right now
    pub active: Option<usize>,
    /// First upcoming step after the active one
    pub next: Option<usize>,
    /// Whole seconds left in the active step
    pub countdown_seconds: Option<i64>,
    /// Elapsed fraction of the active step
    pub step_progress: Option<f64>,
    /// Fraction of all steps that are done
    pub overall: f64,
    /// State of every timeline entry, by index
    pub states: Vec<StepState>,
}

impl Progress {
    pub fn done_count(&self) -> usize {
        self.states
            .iter()
            .filter(|state| **state == StepState::Done)
            .count()
    }

    /// Whether every step is done; false for an empty timeline.
    pub fn is_finished(&self) -> bool {
        !self.states.is_empty() && self.done_count() == self.states.len()
    }
}

impl Timeline {
    /// A step is done if the baker said so or its end has passed.
    pub fn is_step_done(&self, index: usize, now: Timestamp, completed: &CompletionSet) -> bool {
        completed.contains(index) || self.get(index).is_some_and(|entry| now > entry.end)
    }

    /// Lowest index that is not done and covers `now`.
    pub fn active_index(&self, now: Timestamp, completed: &CompletionSet) -> Option<usize> {
        self.iter().enumerate().position(|(index, entry)| {
            !self.is_step_done(index, now, completed) && entry.start <= now && now < entry.end
        })
    }
}

/// Computes active and next steps, countdown and progress fractions.
///
/// # Examples
///
/// ```rust
/// use backplan_core::{
///     models::{Phase, Step, StepKind},
///     schedule::{compute_timeline, query_progress, CompletionSet},
/// };
/// use jiff::Timestamp;
///
/// let phases = vec![Phase::sequential(
///     "Hauptteig",
///     vec![Step::new("Mix", StepKind::Action, 10), Step::new("Rest", StepKind::Wait, 90)],
/// )];
/// let timeline = compute_timeline(&phases, "2024-05-04T12:00:00Z".parse().unwrap()).unwrap();
/// let now: Timestamp = "2024-05-04T10:25:00Z".parse().unwrap();
///
/// let progress = query_progress(&timeline, now, &CompletionSet::new());
/// assert_eq!(progress.active, Some(0));
/// assert_eq!(progress.next, Some(1));
/// assert_eq!(progress.countdown_seconds, Some(300));
/// ```
pub fn query_progress(timeline: &Timeline, now: Timestamp, completed: &CompletionSet) -> Progress {
    let done: Vec<bool> = (0..timeline.len())
        .map(|index| timeline.is_step_done(index, now, completed))
        .collect();
    let active = timeline.active_index(now, completed);

    let first_candidate = active.map_or(0, |index| index + 1);
    let next = (first_candidate..timeline.len())
        .find(|&index| !done[index] && timeline[index].start > now);

    let countdown_seconds =
        active.map(|index| timeline[index].end.duration_since(now).as_secs().max(0));
    let step_progress = active.map(|index| timeline[index].progress_at(now));

    let done_count = done.iter().filter(|done| **done).count();
    let overall = if timeline.is_empty() {
        0.0
    } else {
        done_count as f64 / timeline.len() as f64
    };

    let states = done
        .iter()
        .enumerate()
        .map(|(index, &done)| {
            if done {
                StepState::Done
            } else if Some(index) == active {
                StepState::Active
            } else {
                StepState::Pending
            }
        })
        .collect();

    Progress {
        active,
        next,
        countdown_seconds,
        step_progress,
        overall,
        states,
    }
}

/// Returns the completion set after the baker toggles step `index`.
///
/// A done step is un-marked; the active step is marked done early; any other
/// index leaves the set untouched, so steps cannot be skipped out of order.
pub fn toggle_completion(
    completed: &CompletionSet,
    index: usize,
    timeline: &Timeline,
    now: Timestamp,
) -> CompletionSet {
    if index >= timeline.len() {
        debug!(
            "Ignoring toggle of step {index}: timeline has {} steps",
            timeline.len()
        );
        return completed.clone();
    }

    if timeline.is_step_done(index, now, completed) {
        completed.without(index)
    } else if timeline.active_index(now, completed) == Some(index) {
        completed.with(index)
    } else {
        debug!("Ignoring toggle of step {index}: neither done nor active");
        completed.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{Phase, Step, StepKind},
        schedule::compute_timeline,
    };

    fn at(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    /// Mix 09:35-09:45, Rest 09:45-11:15, Bake 11:15-12:00.
    fn timeline() -> Timeline {
        let phases = vec![Phase::sequential(
            "Hauptteig",
            vec![
                Step::new("Mix", StepKind::Action, 10),
                Step::new("Rest", StepKind::Wait, 90),
                Step::new("Bake", StepKind::Bake, 45),
            ],
        )];
        compute_timeline(&phases, at("2024-05-04T12:00:00Z")).unwrap()
    }

    fn untouched_progress(now: &str) -> Progress {
        query_progress(&timeline(), at(now), &CompletionSet::new())
    }

    #[test]
    fn test_before_the_first_step() {
        let progress = untouched_progress("2024-05-04T09:00:00Z");

        assert_eq!(progress.active, None);
        assert_eq!(progress.next, Some(0));
        assert_eq!(progress.countdown_seconds, None);
        assert_eq!(progress.step_progress, None);
        assert_eq!(progress.overall, 0.0);
        assert_eq!(progress.states, vec![StepState::Pending; 3]);
    }

    #[test]
    fn test_in_the_middle_of_a_step() {
        let progress = untouched_progress("2024-05-04T10:30:00Z");

        assert_eq!(progress.active, Some(1));
        assert_eq!(progress.next, Some(2));
        assert_eq!(progress.countdown_seconds, Some(45 * 60));
        assert_eq!(progress.step_progress, Some(0.5));
        assert!((progress.overall - 1.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(
            progress.states,
            vec![StepState::Done, StepState::Active, StepState::Pending]
        );
    }

    #[test]
    fn test_step_boundary_belongs_to_the_later_step() {
        let progress = untouched_progress("2024-05-04T09:45:00Z");
        assert_eq!(progress.active, Some(1));
        assert_eq!(progress.states[0], StepState::Pending);
    }

    #[test]
    fn test_after_the_last_step() {
        let progress = untouched_progress("2024-05-04T12:00:01Z");

        assert_eq!(progress.active, None);
        assert_eq!(progress.next, None);
        assert_eq!(progress.overall, 1.0);
        assert!(progress.is_finished());
    }

    #[test]
    fn test_empty_timeline() {
        let now = at("2024-05-04T12:00:00Z");
        let progress = query_progress(&Timeline::default(), now, &CompletionSet::new());

        assert_eq!(progress.active, None);
        assert_eq!(progress.next, None);
        assert_eq!(progress.overall, 0.0);
        assert!(!progress.is_finished());
    }

    #[test]
    fn test_early_completion_leaves_a_gap() {
        let now = at("2024-05-04T10:30:00Z");
        let completed: CompletionSet = [1].into_iter().collect();
        let progress = query_progress(&timeline(), now, &completed);

        assert_eq!(progress.active, None);
        assert_eq!(progress.next, Some(2));
        assert!((progress.overall - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_toggle_marks_active_step_done() {
        let timeline = timeline();
        let now = at("2024-05-04T10:30:00Z");

        let completed = toggle_completion(&CompletionSet::new(), 1, &timeline, now);
        assert!(completed.contains(1));

        // Toggling again undoes it.
        let completed = toggle_completion(&completed, 1, &timeline, now);
        assert!(completed.is_empty());
    }

    #[test]
    fn test_toggle_cannot_skip_future_steps() {
        let timeline = timeline();
        let now = at("2024-05-04T10:30:00Z");

        let completed = toggle_completion(&CompletionSet::new(), 2, &timeline, now);
        assert!(completed.is_empty());

        let completed = toggle_completion(&CompletionSet::new(), 7, &timeline, now);
        assert!(completed.is_empty());
    }

    #[test]
    fn test_toggle_of_time_passed_step_is_a_no_op() {
        let timeline = timeline();
        let now = at("2024-05-04T10:30:00Z");

        let completed = toggle_completion(&CompletionSet::new(), 0, &timeline, now);
        assert!(completed.is_empty());
        assert!(timeline.is_step_done(0, now, &completed));
    }
}
