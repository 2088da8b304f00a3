//! Error types for the backplan library.

use std::path::PathBuf;

use jiff::Timestamp;
use thiserror::Error;

/// Comprehensive error type for all library operations.
#[derive(Error, Debug)]
pub enum BackplanError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Recipe not found for the given ID
    #[error("Recipe with ID {id} not found")]
    RecipeNotFound { id: u64 },
    /// The recipe has no bake planned
    #[error("Recipe with ID {recipe_id} has no bake in progress")]
    NoActiveBake { recipe_id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// A blocking database job panicked or was cancelled
    #[error("Background task failed: {source}")]
    Task {
        #[from]
        source: tokio::task::JoinError,
    },
    /// The chosen anchor cannot be scheduled
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    /// A computed instant fell outside the representable range
    #[error("Schedule does not fit in the supported time range: {source}")]
    TimeOutOfRange {
        #[source]
        source: jiff::Error,
    },
}

/// Reasons a "finish by" instant cannot be planned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The finish instant is not in the future
    #[error("Finish time {finish_at} is not in the future (now: {now})")]
    PastDeadline {
        finish_at: Timestamp,
        now: Timestamp,
    },
    /// The window between now and the finish instant is too short
    #[error(
        "Not enough lead time: the recipe needs {required_minutes} min but only \
         {available_minutes} min remain"
    )]
    InsufficientLeadTime {
        required_minutes: u64,
        available_minutes: i64,
    },
}

/// A step that had to be coerced while normalizing imported data.
///
/// These never abort an import; they are logged and handed back to the
/// caller next to the normalized recipe.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedStep {
    #[error("step '{instruction}' has no duration, using 0 min")]
    MissingDuration { instruction: String },
    #[error("step '{instruction}' has negative duration {value}, using 0 min")]
    NegativeDuration { instruction: String, value: f64 },
    #[error("step '{instruction}' has non-numeric duration '{value}', using 0 min")]
    NonNumericDuration { instruction: String, value: String },
    #[error("step '{instruction}' has fractional duration {value}, rounded to {rounded} min")]
    FractionalDuration {
        instruction: String,
        value: f64,
        rounded: u32,
    },
    #[error("step '{instruction}' has duration {value} min, capped at {capped} min")]
    ExcessiveDuration {
        instruction: String,
        value: String,
        capped: u32,
    },
    #[error("step '{instruction}' has unknown kind '{kind}', treated as action")]
    UnknownKind { instruction: String, kind: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> BackplanError {
        BackplanError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BackplanError {
        BackplanError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BackplanError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| BackplanError::database(message).with_source(e))
    }
}

/// Extension trait mapping jiff arithmetic failures.
pub trait TimeResultExt<T> {
    fn out_of_range(self) -> Result<T>;
}

impl<T> TimeResultExt<T> for std::result::Result<T, jiff::Error> {
    fn out_of_range(self) -> Result<T> {
        self.map_err(|source| BackplanError::TimeOutOfRange { source })
    }
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, BackplanError>;
