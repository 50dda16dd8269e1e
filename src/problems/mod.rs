//! Bundled concrete search problems.
//!
//! Small, fully specified problem types used by the tests and examples:
//! an explicit adjacency-list graph and a rectangular wall maze. Both
//! implement [`SearchProblem`](crate::core::SearchProblem) and nothing
//! engine-specific.

pub mod graph;
pub mod grid;

pub use graph::GraphProblem;
pub use grid::{manhattan_heuristic, GridProblem, Move, Pos};
