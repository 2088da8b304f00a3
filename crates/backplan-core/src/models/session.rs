//! Bake session model: the per-recipe state a caller keeps between reads.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::schedule::{Anchor, CompletionSet};

/// The stored half of a bake in progress.
///
/// Only the anchor and the explicit completions are kept; the timeline is
/// recomputed from the recipe every time the session is read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BakeSession {
    /// Recipe this bake belongs to
    pub recipe_id: u64,

    /// Anchor the baker chose when planning
    pub anchor: Anchor,

    /// Timeline indices the baker marked by hand
    #[serde(default)]
    pub completed: CompletionSet,

    /// When the bake was planned (UTC)
    pub created_at: Timestamp,
}
