//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes popped, goal-tested, and expanded (successors generated).
    pub nodes_expanded: u64,

    /// Nodes pushed onto the frontier (including duplicates of
    /// already-frontier states; the closed list is checked at pop time).
    pub nodes_generated: u64,

    /// High-water mark of the frontier size.
    pub max_frontier: usize,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
