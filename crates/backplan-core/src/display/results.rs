//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{ImportedRecipe, Recipe};

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<ImportedRecipe> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added recipe with ID: {}", self.resource.recipe.id)?;
        writeln!(f)?;

        if !self.resource.warnings.is_empty() {
            writeln!(f, "Some steps had to be adjusted:")?;
            for warning in &self.resource.warnings {
                writeln!(f, "- {warning}")?;
            }
            writeln!(f)?;
        }

        write!(f, "{}", self.resource.recipe)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Recipe> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted recipe '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}
