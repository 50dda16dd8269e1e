//! Decision statistics for diagnostics and pruning verification.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `decide` call.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DecisionStats {
    /// Tree nodes visited (root included).
    pub nodes_visited: u64,

    /// Terminal evaluations performed (depth limit, win, loss, or the
    /// no-legal-actions fallback).
    pub leaves_evaluated: u64,

    /// Alpha-beta cutoffs taken. Always zero outside `AlphaBeta` mode.
    pub cutoffs: u64,
}

impl DecisionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = DecisionStats::new();
        assert_eq!(stats.nodes_visited, 0);
        assert_eq!(stats.leaves_evaluated, 0);
        assert_eq!(stats.cutoffs, 0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = DecisionStats::new();
        stats.nodes_visited = 12;
        stats.cutoffs = 3;

        stats.reset();

        assert_eq!(stats.nodes_visited, 0);
        assert_eq!(stats.cutoffs, 0);
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = DecisionStats::new();
        stats.nodes_visited = 99;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: DecisionStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats.nodes_visited, deserialized.nodes_visited);
    }
}
