use backplan_core::{
    models::Phase,
    schedule::{
        compute_timeline, estimate_total_minutes, query_progress, schedule_span_minutes,
        validate_finish_time, CompletionSet, Timeline,
    },
    ScheduleError,
};
use jiff::{SignedDuration, Timestamp};

mod common;

use common::{at, phase};

/// Poolish and a soaker around a three-phase main chain.
fn pain_de_campagne() -> Vec<Phase> {
    vec![
        phase("Poolish", true, &[("Mix poolish", 10), ("Ferment", 710)]),
        phase("Hauptteig", false, &[("Mix", 15), ("Bulk", 120)]),
        phase("Soaker", true, &[("Soak seeds", 60)]),
        phase("Formen", false, &[("Shape", 10), ("Proof", 60)]),
        phase("Backen", false, &[("Bake", 45)]),
    ]
}

fn finish() -> Timestamp {
    at("2024-05-04T12:00:00Z")
}

fn sequential_intervals(timeline: &Timeline) -> Vec<(String, Timestamp, Timestamp)> {
    timeline
        .iter()
        .filter(|entry| !entry.is_parallel)
        .map(|entry| (entry.instruction.clone(), entry.start, entry.end))
        .collect()
}

#[test]
fn test_last_sequential_step_ends_at_finish() {
    let timeline = compute_timeline(&pain_de_campagne(), finish()).expect("Failed to plan");

    let last = timeline
        .iter()
        .filter(|entry| !entry.is_parallel)
        .max_by_key(|entry| entry.end)
        .expect("Timeline has sequential steps");
    assert_eq!(last.instruction, "Bake");
    assert_eq!(last.end, finish());
    assert_eq!(timeline.ends_at(), Some(finish()));
}

#[test]
fn test_sequential_steps_have_no_gaps() {
    let timeline = compute_timeline(&pain_de_campagne(), finish()).expect("Failed to plan");
    let chain = sequential_intervals(&timeline);

    assert_eq!(chain.len(), 5);
    for pair in chain.windows(2) {
        assert_eq!(pair[0].2, pair[1].1, "gap after {}", pair[0].0);
    }
}

#[test]
fn test_parallel_phases_end_at_their_sync_point() {
    let timeline = compute_timeline(&pain_de_campagne(), finish()).expect("Failed to plan");
    let find = |instruction: &str| {
        timeline
            .iter()
            .find(|entry| entry.instruction == instruction)
            .expect("Step should be scheduled")
    };

    // Poolish feeds Hauptteig, the soaker feeds Formen
    assert_eq!(find("Ferment").end, find("Mix").start);
    assert_eq!(find("Soak seeds").end, find("Shape").start);
    assert_eq!(find("Mix poolish").start, at("2024-05-03T19:50:00Z"));
}

#[test]
fn test_timeline_is_chronological() {
    let timeline = compute_timeline(&pain_de_campagne(), finish()).expect("Failed to plan");

    let starts: Vec<Timestamp> = timeline.iter().map(|entry| entry.start).collect();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted);
    assert_eq!(timeline.len(), 8);
}

#[test]
fn test_compute_timeline_is_idempotent() {
    let phases = pain_de_campagne();
    let first = compute_timeline(&phases, finish()).expect("Failed to plan");
    let second = compute_timeline(&phases, finish()).expect("Failed to plan");
    assert_eq!(first, second);
}

#[test]
fn test_removing_a_parallel_phase_keeps_the_main_chain() {
    let phases = pain_de_campagne();
    let without_soaker: Vec<Phase> = phases
        .iter()
        .filter(|phase| phase.name != "Soaker")
        .cloned()
        .collect();

    let full = compute_timeline(&phases, finish()).expect("Failed to plan");
    let reduced = compute_timeline(&without_soaker, finish()).expect("Failed to plan");

    assert_eq!(sequential_intervals(&full), sequential_intervals(&reduced));
    assert_eq!(reduced.len(), full.len() - 1);
}

#[test]
fn test_removing_a_sequential_phase_shortens_the_schedule_by_its_duration() {
    let phases = pain_de_campagne();
    let without_formen: Vec<Phase> = phases
        .iter()
        .filter(|phase| phase.name != "Formen")
        .cloned()
        .collect();

    let full = compute_timeline(&phases, finish()).expect("Failed to plan");
    let reduced = compute_timeline(&without_formen, finish()).expect("Failed to plan");

    let chain_start = |timeline: &Timeline| sequential_intervals(timeline)[0].1;
    assert_eq!(
        chain_start(&reduced).duration_since(chain_start(&full)),
        SignedDuration::from_mins(70)
    );
    assert_eq!(
        schedule_span_minutes(&phases) - schedule_span_minutes(&without_formen),
        70
    );
    assert_eq!(
        estimate_total_minutes(&phases) - estimate_total_minutes(&without_formen),
        70
    );
}

#[test]
fn test_done_is_monotonic_in_now() {
    let timeline = compute_timeline(&pain_de_campagne(), finish()).expect("Failed to plan");
    let completed = CompletionSet::new();

    let mut now = at("2024-05-03T19:00:00Z");
    let mut was_done = vec![false; timeline.len()];
    while now <= at("2024-05-04T12:30:00Z") {
        for (index, was) in was_done.iter_mut().enumerate() {
            let done = timeline.is_step_done(index, now, &completed);
            assert!(done || !*was, "step {index} reverted at {now}");
            *was = done;
        }
        now = now
            .checked_add(SignedDuration::from_mins(5))
            .expect("Timestamp in range");
    }
    assert!(was_done.iter().all(|done| *done));
}

#[test]
fn test_overall_progress_bounds() {
    let empty = query_progress(&Timeline::default(), finish(), &CompletionSet::new());
    assert_eq!(empty.overall, 0.0);

    let timeline = compute_timeline(&pain_de_campagne(), finish()).expect("Failed to plan");
    let before = query_progress(&timeline, at("2024-05-03T18:00:00Z"), &CompletionSet::new());
    assert_eq!(before.overall, 0.0);

    let after = query_progress(&timeline, at("2024-05-04T12:00:01Z"), &CompletionSet::new());
    assert_eq!(after.overall, 1.0);
    assert!(after.is_finished());
}

#[test]
fn test_hauptteig_scenario() {
    let phases = vec![phase(
        "Hauptteig",
        false,
        &[("Mix", 10), ("Rest", 90), ("Bake", 45)],
    )];
    let timeline = compute_timeline(&phases, finish()).expect("Failed to plan");

    let intervals = sequential_intervals(&timeline);
    assert_eq!(
        intervals,
        vec![
            (
                "Mix".to_string(),
                at("2024-05-04T09:35:00Z"),
                at("2024-05-04T09:45:00Z")
            ),
            (
                "Rest".to_string(),
                at("2024-05-04T09:45:00Z"),
                at("2024-05-04T11:15:00Z")
            ),
            (
                "Bake".to_string(),
                at("2024-05-04T11:15:00Z"),
                at("2024-05-04T12:00:00Z")
            ),
        ]
    );
}

#[test]
fn test_insufficient_lead_time_scenario() {
    let phases = vec![phase("Hauptteig", false, &[("Everything", 60)])];

    let result = validate_finish_time(
        at("2024-05-04T10:05:00Z"),
        at("2024-05-04T10:00:00Z"),
        &phases,
    );
    assert_eq!(
        result,
        Err(ScheduleError::InsufficientLeadTime {
            required_minutes: 60,
            available_minutes: 5,
        })
    );
}
