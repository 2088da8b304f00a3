//! Un-normalized recipe data as it arrives from import documents.

use serde::{Deserialize, Serialize};

/// A step as written in an import document.
///
/// `kind` and `duration_minutes` are kept loose because imported data is
/// often sloppy; [`crate::schedule::duration`] turns them into a [`super::Step`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawStep {
    pub instruction: String,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default, alias = "duration")]
    pub duration_minutes: Option<serde_json::Value>,
}

/// A phase as written in an import document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawPhase {
    pub name: String,
    /// Explicit flag; when absent the name decides once, at import
    #[serde(default)]
    pub is_parallel: Option<bool>,
    #[serde(default)]
    pub steps: Vec<RawStep>,
}
