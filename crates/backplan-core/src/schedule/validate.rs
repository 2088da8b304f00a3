//! Feasibility check for "be done by" planning.

use jiff::Timestamp;

use super::estimate_total_minutes;
use crate::{error::ScheduleError, models::Phase};

/// Checks that `finish_at` lies in the future with enough lead time.
///
/// Lead time is measured against [`estimate_total_minutes`]. Planning from
/// "now" or from a start instant never needs this check.
///
/// # Errors
///
/// * `ScheduleError::PastDeadline` if `finish_at <= now`
/// * `ScheduleError::InsufficientLeadTime` if the window is shorter than the
///   estimated total
pub fn validate_finish_time(
    finish_at: Timestamp,
    now: Timestamp,
    phases: &[Phase],
) -> Result<(), ScheduleError> {
    if finish_at <= now {
        return Err(ScheduleError::PastDeadline { finish_at, now });
    }

    let required_minutes = estimate_total_minutes(phases);
    let available_seconds = finish_at.duration_since(now).as_secs();
    if i128::from(available_seconds) < i128::from(required_minutes) * 60 {
        return Err(ScheduleError::InsufficientLeadTime {
            required_minutes,
            available_minutes: available_seconds / 60,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Step, StepKind};

    fn at(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn one_hour() -> Vec<Phase> {
        vec![Phase::sequential(
            "Hauptteig",
            vec![Step::new("Proof", StepKind::Wait, 60)],
        )]
    }

    #[test]
    fn test_past_deadline() {
        let now = at("2024-05-04T10:00:00Z");
        assert_eq!(
            validate_finish_time(now, now, &one_hour()),
            Err(ScheduleError::PastDeadline {
                finish_at: now,
                now,
            })
        );
        assert!(matches!(
            validate_finish_time(at("2024-05-04T09:00:00Z"), now, &[]),
            Err(ScheduleError::PastDeadline { .. })
        ));
    }

    #[test]
    fn test_insufficient_lead_time() {
        let result = validate_finish_time(
            at("2024-05-04T10:05:00Z"),
            at("2024-05-04T10:00:00Z"),
            &one_hour(),
        );
        assert_eq!(
            result,
            Err(ScheduleError::InsufficientLeadTime {
                required_minutes: 60,
                available_minutes: 5,
            })
        );
    }

    #[test]
    fn test_exact_lead_time_is_enough() {
        let result = validate_finish_time(
            at("2024-05-04T11:00:00Z"),
            at("2024-05-04T10:00:00Z"),
            &one_hour(),
        );
        assert_eq!(result, Ok(()));
    }
}
