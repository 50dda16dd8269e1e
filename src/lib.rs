//! # rust-decision
//!
//! A general-purpose state-space search and game-tree decision engine.
//!
//! ## Design Principles
//!
//! 1. **Problem-Agnostic**: The engines consume trait abstractions only.
//!    Concrete mazes, graphs, and boards implement `SearchProblem` or
//!    `GameTree`; nothing engine-side knows what a state looks like.
//!
//! 2. **Explicit Inputs**: Heuristics and evaluation functions are passed
//!    as typed closures. No registries, no lookup by name.
//!
//! 3. **Deterministic by Default**: Stable frontier tie-breaking and
//!    first-action tie-breaking at the game-tree root make every decision
//!    reproducible; randomness is opt-in and seeded.
//!
//! ## Architecture
//!
//! - **Pop-Time Goal Testing**: The search loop goal-tests states as they
//!   leave the frontier and checks the closed list only then; duplicates
//!   may coexist on the frontier, trading memory for simplicity.
//!
//! - **Explicit Ply Bookkeeping**: The game-tree recursion carries a
//!   `(depth, agent)` pair; depth counts completed rounds through all
//!   agents, and the maximizer role is derived from the agent index.
//!
//! - **Typed Outcomes**: Exhausted searches return `NoSolution` and
//!   actionless roots return `NoLegalActions`; neither is a panic.
//!
//! ## Modules
//!
//! - `core`: problem and game-tree traits, agent ids, seeded RNG
//! - `frontier`: stack, queue, and stable priority-queue frontiers
//! - `search`: depth-first, breadth-first, uniform-cost, and A* search
//! - `adversarial`: minimax, alpha-beta, expectimax, reflex decisions
//! - `problems`: bundled graph and grid maze problems
//! - `games`: bundled tic-tac-toe game

pub mod adversarial;
pub mod core;
pub mod frontier;
pub mod games;
pub mod problems;
pub mod search;

// Re-export commonly used types
pub use crate::core::{null_heuristic, AgentId, GameTree, SearchProblem, SeededRng, Successor};

pub use crate::frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};

pub use crate::search::{
    astar_search, breadth_first_search, depth_first_search, uniform_cost_search, Plan, Search,
    SearchError, SearchNode, SearchStats,
};

pub use crate::adversarial::{
    reflex_decide, Decision, DecisionConfig, DecisionError, DecisionMode, DecisionStats,
    GameTreeSearch, TieBreak,
};

pub use crate::problems::{manhattan_heuristic, GraphProblem, GridProblem};

pub use crate::games::{tictactoe_utility, Mark, TicTacToe};
