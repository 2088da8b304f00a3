//! Duration overview of a recipe.

use std::fmt;

use super::datetime::Minutes;
use crate::{
    models::Recipe,
    schedule::{estimate_total_minutes, schedule_span_minutes},
};

/// Shows both the quick estimate and the real schedule span of a recipe.
///
/// The two differ when a parallel phase is not the first thing to start:
/// the estimate counts the longest parallel phase in full, the span only
/// counts how far it reaches before the main chain.
pub struct Estimate<'a>(pub &'a Recipe);

impl<'a> fmt::Display for Estimate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = self.0;
        writeln!(f, "# Estimate for {} (ID: {})", recipe.title, recipe.id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Estimated total: {}",
            Minutes(estimate_total_minutes(&recipe.phases))
        )?;
        writeln!(
            f,
            "- Schedule span: {}",
            Minutes(schedule_span_minutes(&recipe.phases))
        )?;

        if !recipe.phases.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Phases")?;
            writeln!(f)?;
            for phase in &recipe.phases {
                writeln!(
                    f,
                    "- {}: {} ({})",
                    phase.name,
                    Minutes(phase.total_minutes()),
                    phase.kind().as_str()
                )?;
            }
        }

        Ok(())
    }
}
