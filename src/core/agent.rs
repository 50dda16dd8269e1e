//! Agent identification for multi-agent game trees.
//!
//! ## AgentId
//!
//! Type-safe agent index supporting up to 255 agents per game.
//! Agent 0 is always the maximizing agent; agents `1..num_agents`
//! are minimizing (or chance) agents. The role is derived from the
//! index alone, never carried as a separate flag.

use serde::{Deserialize, Serialize};

/// Agent identifier for turn-ordered game trees.
///
/// Agent indices are 0-based: the maximizing agent is `AgentId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u8);

impl AgentId {
    /// The maximizing agent.
    pub const MAX_AGENT: AgentId = AgentId(0);

    /// Create a new agent ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw agent index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this agent maximizes the evaluation (agent 0).
    #[must_use]
    pub const fn is_maximizer(self) -> bool {
        self.0 == 0
    }

    /// Whether this is the last agent in a round of `num_agents`.
    #[must_use]
    pub fn is_last(self, num_agents: usize) -> bool {
        self.index() + 1 == num_agents
    }

    /// The agent that moves after this one, given `num_agents` in the game.
    ///
    /// Wraps back to the maximizing agent at the end of a round.
    #[must_use]
    pub fn next(self, num_agents: usize) -> AgentId {
        if self.is_last(num_agents) {
            AgentId::MAX_AGENT
        } else {
            AgentId(self.0 + 1)
        }
    }

}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent {}", self.0)
    }
}
