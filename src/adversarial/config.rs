//! Decision engine configuration.

use serde::{Deserialize, Serialize};

/// Which backup rule the game-tree engine applies at opponent nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionMode {
    /// Opponents minimize the maximizer's value.
    Minimax,

    /// Minimax with alpha-beta pruning. Identical root action and value,
    /// fewer nodes visited.
    AlphaBeta,

    /// Opponents choose uniformly at random; nodes back up the mean.
    Expectimax,
}

/// Configuration for the game-tree decision engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionConfig {
    /// Search depth limit in plies. A ply is one full round through all
    /// agents; depth increments only after the last agent moves.
    pub depth: u32,

    /// Backup rule for opponent nodes.
    pub mode: DecisionMode,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            mode: DecisionMode::Minimax,
        }
    }
}

impl DecisionConfig {
    /// Create a config with a custom depth limit.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a config with a custom decision mode.
    pub fn with_mode(mut self, mode: DecisionMode) -> Self {
        self.mode = mode;
        self
    }
}
