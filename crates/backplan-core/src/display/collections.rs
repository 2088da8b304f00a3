//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::RecipeSummary;

/// Newtype wrapper for displaying collections of recipe summaries.
///
/// # Examples
///
/// ```rust
/// use backplan_core::{display::RecipeSummaries, models::RecipeSummary};
/// use jiff::Timestamp;
///
/// let summary = RecipeSummary {
///     id: 1,
///     title: "Roggenmischbrot".to_string(),
///     phase_count: 2,
///     step_count: 6,
///     total_minutes: 900,
///     has_active_bake: false,
///     created_at: Timestamp::now(),
/// };
///
/// let output = format!("{}", RecipeSummaries(vec![summary]));
/// assert!(output.contains("Roggenmischbrot"));
/// assert_eq!(format!("{}", RecipeSummaries(vec![])), "No recipes found.\n");
/// ```
pub struct RecipeSummaries(pub Vec<RecipeSummary>);

impl RecipeSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the summary at the given index.
    pub fn get(&self, index: usize) -> Option<&RecipeSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, RecipeSummary> {
        self.0.iter()
    }
}

impl Index<usize> for RecipeSummaries {
    type Output = RecipeSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for RecipeSummaries {
    type Item = RecipeSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecipeSummaries {
    type Item = &'a RecipeSummary;
    type IntoIter = std::slice::Iter<'a, RecipeSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for RecipeSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No recipes found.")
        } else {
            for recipe in &self.0 {
                write!(f, "{recipe}")?;
            }
            Ok(())
        }
    }
}
