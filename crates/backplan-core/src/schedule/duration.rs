//! Duration model: turns loosely typed imported steps into [`Step`]s.
//!
//! Normalization never fails. A step whose duration cannot be read becomes a
//! zero-minute [`StepKind::Action`]; every coercion is logged and reported
//! back as a [`MalformedStep`] so the caller can show it next to the recipe.

use log::{debug, warn};
use serde_json::Value;

use crate::{
    error::MalformedStep,
    models::{Phase, RawPhase, RawStep, Step, StepKind},
};

/// Phases produced from raw input plus everything that had to be coerced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    pub phases: Vec<Phase>,
    pub warnings: Vec<MalformedStep>,
}

/// Normalizes a single raw step.
///
/// # Examples
///
/// ```rust
/// use backplan_core::{models::{RawStep, StepKind}, schedule::normalize_step};
///
/// let raw = RawStep {
///     instruction: "Stretch and fold".to_string(),
///     kind: Some("action".to_string()),
///     duration_minutes: Some(serde_json::json!(-5)),
/// };
/// let (step, warnings) = normalize_step(&raw);
/// assert_eq!(step.duration_minutes, 0);
/// assert_eq!(step.kind, StepKind::Action);
/// assert_eq!(warnings.len(), 1);
/// ```
pub fn normalize_step(raw: &RawStep) -> (Step, Vec<MalformedStep>) {
    let instruction = raw.instruction.trim().to_string();
    let mut warnings = Vec::new();

    let (minutes, duration_issue) = read_minutes(&instruction, raw.duration_minutes.as_ref());
    warnings.extend(duration_issue);

    let kind = match (&raw.kind, minutes) {
        // An unreadable duration demotes the step to a plain action.
        (None, _) | (_, None) => StepKind::Action,
        (Some(kind), Some(_)) => kind.parse().unwrap_or_else(|_| {
            warnings.push(MalformedStep::UnknownKind {
                instruction: instruction.clone(),
                kind: kind.clone(),
            });
            StepKind::Action
        }),
    };

    let step = Step {
        instruction,
        kind,
        duration_minutes: minutes.unwrap_or(0),
    };
    (step, warnings)
}

/// Normalizes a raw phase list into schedulable phases.
///
/// Phases that do not state `isParallel` get their flag from
/// [`Phase::infer_parallel`]; this is the only place the name is consulted.
pub fn normalize_phases(raw: &[RawPhase]) -> Normalized {
    let mut normalized = Normalized::default();

    for raw_phase in raw {
        let name = raw_phase.name.trim().to_string();
        let is_parallel = raw_phase.is_parallel.unwrap_or_else(|| {
            let inferred = Phase::infer_parallel(&name);
            debug!("Phase '{name}' has no parallel flag, defaulting to {inferred}");
            inferred
        });

        let mut steps = Vec::with_capacity(raw_phase.steps.len());
        for raw_step in &raw_phase.steps {
            let (step, warnings) = normalize_step(raw_step);
            for warning in &warnings {
                warn!("Phase '{name}': {warning}");
            }
            normalized.warnings.extend(warnings);
            steps.push(step);
        }

        normalized.phases.push(Phase {
            name,
            is_parallel,
            steps,
        });
    }

    normalized
}

fn read_minutes(instruction: &str, value: Option<&Value>) -> (Option<u32>, Option<MalformedStep>) {
    match value {
        None | Some(Value::Null) => (
            None,
            Some(MalformedStep::MissingDuration {
                instruction: instruction.to_string(),
            }),
        ),
        Some(Value::Number(number)) => {
            if let Some(minutes) = number.as_u64() {
                match u32::try_from(minutes) {
                    Ok(minutes) => (Some(minutes), None),
                    Err(_) => capped(instruction, number.to_string()),
                }
            } else if let Some(minutes) = number.as_f64() {
                minutes_from_f64(instruction, minutes)
            } else {
                non_numeric(instruction, number.to_string())
            }
        }
        Some(Value::String(text)) => match text.trim().parse::<f64>() {
            Ok(minutes) if minutes.is_finite() => minutes_from_f64(instruction, minutes),
            _ => non_numeric(instruction, text.clone()),
        },
        Some(other) => non_numeric(instruction, other.to_string()),
    }
}

fn minutes_from_f64(instruction: &str, value: f64) -> (Option<u32>, Option<MalformedStep>) {
    if value < 0.0 {
        return (
            None,
            Some(MalformedStep::NegativeDuration {
                instruction: instruction.to_string(),
                value,
            }),
        );
    }

    if value.round() > f64::from(u32::MAX) {
        return capped(instruction, value.to_string());
    }

    let rounded = value.round() as u32;
    if value.fract() == 0.0 {
        (Some(rounded), None)
    } else {
        (
            Some(rounded),
            Some(MalformedStep::FractionalDuration {
                instruction: instruction.to_string(),
                value,
                rounded,
            }),
        )
    }
}

fn capped(instruction: &str, value: String) -> (Option<u32>, Option<MalformedStep>) {
    (
        Some(u32::MAX),
        Some(MalformedStep::ExcessiveDuration {
            instruction: instruction.to_string(),
            value,
            capped: u32::MAX,
        }),
    )
}

fn non_numeric(instruction: &str, value: String) -> (Option<u32>, Option<MalformedStep>) {
    (
        None,
        Some(MalformedStep::NonNumericDuration {
            instruction: instruction.to_string(),
            value,
        }),
    )
}
