//! Bundled concrete games.
//!
//! Reference [`GameTree`](crate::core::GameTree) implementations for tests
//! and examples.

pub mod tictactoe;

pub use tictactoe::{tictactoe_utility, Mark, TicTacToe};
