//! Single-agent state-space search.
//!
//! ## Overview
//!
//! Uninformed and informed search over an implicit graph defined by a
//! [`SearchProblem`](crate::core::SearchProblem):
//!
//! - **Depth-first** and **breadth-first**: strict stack/queue order,
//!   no cost minimization
//! - **Uniform-cost**: cheapest-first, optimal for non-negative costs
//! - **A***: cheapest-plus-heuristic first, optimal under an admissible
//!   heuristic; reduces to uniform-cost with the null heuristic
//!
//! All four share a single frontier-parameterized loop with a pop-time
//! goal test and a pop-time-only closed list.
//!
//! ## Usage
//!
//! ```
//! use rust_decision::problems::GraphProblem;
//! use rust_decision::search::{astar_search, uniform_cost_search};
//! use rust_decision::core::null_heuristic;
//!
//! let problem = GraphProblem::new('a')
//!     .edge('a', 'b', 1.0)
//!     .edge('a', 'c', 5.0)
//!     .edge('b', 'd', 1.0)
//!     .edge('c', 'd', 1.0)
//!     .goal('d');
//!
//! let plan = uniform_cost_search(&problem).unwrap();
//! assert_eq!(plan.actions, vec!['b', 'd']);
//! assert_eq!(plan.cost, 2.0);
//!
//! // A* with the null heuristic is uniform-cost search
//! let same = astar_search(&problem, null_heuristic).unwrap();
//! assert_eq!(same, plan);
//! ```

pub mod engine;
pub mod node;
pub mod stats;

pub use engine::{
    astar_search, breadth_first_search, depth_first_search, uniform_cost_search, Plan, Search,
    SearchError,
};
pub use node::SearchNode;
pub use stats::SearchStats;
