use backplan_core::{
    models::{Phase, Step, StepKind},
    LibraryBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test library
#[allow(dead_code)]
pub async fn create_test_library() -> (TempDir, backplan_core::Library) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let library = LibraryBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create library");
    (temp_dir, library)
}

/// Parses an RFC 3339 instant.
#[allow(dead_code)]
pub fn at(s: &str) -> jiff::Timestamp {
    s.parse().expect("Invalid timestamp literal")
}

/// Builds a phase from `(instruction, minutes)` pairs.
#[allow(dead_code)]
pub fn phase(name: &str, is_parallel: bool, steps: &[(&str, u32)]) -> Phase {
    Phase {
        name: name.to_string(),
        is_parallel,
        steps: steps
            .iter()
            .map(|(instruction, minutes)| Step::new(*instruction, StepKind::Wait, *minutes))
            .collect(),
    }
}
