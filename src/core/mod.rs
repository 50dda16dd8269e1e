//! Core abstractions: search problems, game trees, agents, RNG.
//!
//! This module contains the fundamental contracts both engines are generic
//! over. Concrete problems and games implement these traits rather than
//! modifying the engines.

pub mod agent;
pub mod game;
pub mod problem;
pub mod rng;

pub use agent::AgentId;
pub use game::GameTree;
pub use problem::{null_heuristic, SearchProblem, Successor};
pub use rng::SeededRng;
