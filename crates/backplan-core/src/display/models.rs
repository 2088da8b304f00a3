//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer can style it, and reads fine
//! as plain text with `--no-color`.

use std::fmt;

use super::datetime::{Countdown, LocalDateTime, LocalTime, Minutes, Percent};
use crate::{
    models::{BakeReport, Phase, Recipe, RecipeSummary, StepKind, StepState},
    schedule::{estimate_total_minutes, Anchor, PhaseKind, Timeline, TimelineEntry},
};

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.with_icon())
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Now(at) => write!(f, "started now ({})", LocalTime(at)),
            Anchor::StartAt(at) => write!(f, "start at {}", LocalTime(at)),
            Anchor::FinishBy(at) => write!(f, "finish by {}", LocalTime(at)),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} ({}, {})",
            self.name,
            self.kind(),
            Minutes(self.total_minutes())
        )?;
        writeln!(f)?;

        if self.steps.is_empty() {
            writeln!(f, "No steps in this phase.")?;
        } else {
            for (position, step) in self.steps.iter().enumerate() {
                writeln!(
                    f,
                    "{}. {} ({}, {})",
                    position + 1,
                    step.instruction,
                    step.kind,
                    Minutes(u64::from(step.duration_minutes))
                )?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        if let Some(source) = &self.source_url {
            writeln!(f, "- Source: {source}")?;
        }
        writeln!(
            f,
            "- Estimated total: {}",
            Minutes(estimate_total_minutes(&self.phases))
        )?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if self.phases.is_empty() {
            writeln!(f, "\nNo phases in this recipe.")?;
        } else {
            writeln!(f, "\n## Phases")?;
            writeln!(f)?;
            for phase in &self.phases {
                write!(f, "{phase}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for RecipeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let baking = if self.has_active_bake { " (baking)" } else { "" };
        writeln!(f, "## {} (ID: {}){baking}", self.title, self.id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Phases**: {}, **Steps**: {}",
            self.phase_count, self.step_count
        )?;
        writeln!(f, "- **Estimated total**: {}", Minutes(self.total_minutes))?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

impl TimelineEntry {
    fn fmt_entry(&self, f: &mut fmt::Formatter<'_>, index: usize) -> fmt::Result {
        let parallel = if self.is_parallel { " ∥" } else { "" };
        write!(
            f,
            "{index}. {} - {} **{}**{parallel}: {} ({}, {})",
            LocalTime(&self.start),
            LocalTime(&self.end),
            self.phase_name,
            self.instruction,
            self.kind,
            Minutes(u64::from(self.duration_minutes))
        )
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Nothing to schedule.");
        }
        for (index, entry) in self.iter().enumerate() {
            entry.fmt_entry(f, index)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for BakeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = &self.progress;

        writeln!(f, "# Bake: {} (ID: {})", self.title, self.recipe_id)?;
        writeln!(f)?;
        writeln!(f, "- Planned: {}", self.anchor)?;
        if let Some(start) = self.timeline.starts_at() {
            writeln!(f, "- Begins: {}", LocalTime(&start))?;
        }
        writeln!(f, "- Ready: {}", LocalTime(&self.finish_at))?;
        writeln!(
            f,
            "- Progress: {} ({}/{} steps)",
            Percent(progress.overall),
            progress.done_count(),
            self.timeline.len()
        )?;

        if let Some(active) = progress.active {
            let entry = &self.timeline[active];
            writeln!(
                f,
                "- Now: {}: {}, {} left ({} done)",
                entry.phase_name,
                entry.instruction,
                Countdown(progress.countdown_seconds.unwrap_or(0)),
                Percent(progress.step_progress.unwrap_or(0.0))
            )?;
        }
        if let Some(next) = progress.next {
            let entry = &self.timeline[next];
            writeln!(
                f,
                "- Next: {}: {} at {}",
                entry.phase_name,
                entry.instruction,
                LocalTime(&entry.start)
            )?;
        }
        if progress.is_finished() {
            writeln!(f, "- All steps done")?;
        }

        if self.timeline.is_empty() {
            writeln!(f, "\nNothing to schedule.")?;
            return Ok(());
        }

        writeln!(f, "\n## Steps")?;
        writeln!(f)?;
        for (index, entry) in self.timeline.iter().enumerate() {
            entry.fmt_entry(f, index)?;
            let state = progress
                .states
                .get(index)
                .copied()
                .unwrap_or(StepState::Pending);
            writeln!(f, " {state}")?;
        }

        Ok(())
    }
}
