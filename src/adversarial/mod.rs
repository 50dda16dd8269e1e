//! Multi-agent adversarial game-tree search.
//!
//! ## Overview
//!
//! Bounded-depth evaluation of a turn-ordered game tree defined by a
//! [`GameTree`](crate::core::GameTree):
//!
//! - **Minimax**: opponents play the worst case for the maximizer
//! - **AlphaBeta**: minimax with pruning; same root action and value,
//!   fewer nodes visited
//! - **Expectimax**: opponents modeled as uniform-random; nodes back up
//!   the mean
//!
//! plus a one-ply **reflex** decision for baseline agents.
//!
//! ## Usage
//!
//! ```
//! use rust_decision::adversarial::{DecisionConfig, DecisionMode, GameTreeSearch};
//! use rust_decision::games::{tictactoe_utility, TicTacToe};
//!
//! let config = DecisionConfig::default()
//!     .with_depth(9)
//!     .with_mode(DecisionMode::Minimax);
//! let mut search = GameTreeSearch::new(config);
//!
//! let decision = search.decide(&TicTacToe::new(), tictactoe_utility).unwrap();
//! assert_eq!(decision.value, 0.0); // tic-tac-toe is a draw
//! ```

pub mod config;
pub mod engine;
pub mod reflex;
pub mod stats;

pub use config::{DecisionConfig, DecisionMode};
pub use engine::{Decision, DecisionError, GameTreeSearch};
pub use reflex::{reflex_decide, TieBreak};
pub use stats::DecisionStats;
