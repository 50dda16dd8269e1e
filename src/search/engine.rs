//! Core search loop and the four algorithm entry points.
//!
//! All four algorithms share one frontier-parameterized loop:
//!
//! 1. Seed the frontier with the start state, an empty path, cost 0
//! 2. Pop under the frontier's ordering and goal-test the popped state
//!    (pop-time test: the first goal dequeued wins, whatever its cost)
//! 3. If the state has not been expanded before, mark it and push every
//!    successor with the path extended by one action
//! 4. An exhausted frontier means no solution exists
//!
//! The closed list is consulted only at pop time, so duplicate states may
//! coexist on the frontier. That costs memory, not correctness, and keeps
//! node-expansion counts predictable.

use std::time::Instant;

use rustc_hash::FxHashSet;

use crate::core::SearchProblem;
use crate::frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};

use super::node::SearchNode;
use super::stats::SearchStats;

/// A completed plan: the action sequence from start to goal and its
/// accumulated cost under the problem's step costs.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan<A> {
    /// Actions from the start state to the goal, in order.
    pub actions: Vec<A>,

    /// Sum of step costs along the plan.
    pub cost: f64,
}

impl<A> Plan<A> {
    /// Number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the plan is empty (the start state was already a goal).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Search failure taxonomy.
///
/// `NoSolution` is an expected outcome for unsolvable problems, not a
/// fault: the frontier emptied without dequeuing a goal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The reachable state space was exhausted without finding a goal.
    NoSolution,
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::NoSolution => write!(f, "search space exhausted without reaching a goal"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Search context owning per-run statistics and the expansion order.
///
/// The free functions at the bottom of this module are thin wrappers for
/// callers that don't need diagnostics.
///
/// ## Example
///
/// ```
/// use rust_decision::problems::GraphProblem;
/// use rust_decision::search::Search;
///
/// let problem = GraphProblem::new(0)
///     .edge(0, 1, 1.0)
///     .edge(1, 2, 1.0)
///     .goal(2);
///
/// let mut search = Search::new();
/// let plan = search.uniform_cost(&problem).unwrap();
/// assert_eq!(plan.cost, 2.0);
/// assert!(search.stats().nodes_expanded >= 2);
/// ```
pub struct Search<P: SearchProblem> {
    /// Statistics from the most recent run.
    stats: SearchStats,

    /// States in the order they were expanded during the most recent run.
    expanded: Vec<P::State>,
}

impl<P: SearchProblem> Default for Search<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SearchProblem> Search<P> {
    /// Create a new search context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stats: SearchStats::new(),
            expanded: Vec::new(),
        }
    }

    /// Depth-first search: expand the deepest frontier node first.
    ///
    /// Returns some valid plan if one exists; makes no cost or length
    /// guarantee.
    pub fn depth_first(&mut self, problem: &P) -> Result<Plan<P::Action>, SearchError> {
        self.explore(problem, StackFrontier::new(), |_, _| 0.0)
    }

    /// Breadth-first search: expand the shallowest frontier node first.
    ///
    /// Returns some valid plan if one exists; makes no cost guarantee.
    pub fn breadth_first(&mut self, problem: &P) -> Result<Plan<P::Action>, SearchError> {
        self.explore(problem, QueueFrontier::new(), |_, _| 0.0)
    }

    /// Uniform-cost search: expand the cheapest frontier node first.
    ///
    /// Optimal for non-negative step costs.
    pub fn uniform_cost(&mut self, problem: &P) -> Result<Plan<P::Action>, SearchError> {
        self.explore(problem, PriorityFrontier::new(), |_, cost| cost)
    }

    /// A* search: expand the node with the lowest `cost + heuristic` first.
    ///
    /// Optimal when the heuristic never overestimates the true remaining
    /// cost (admissibility is the caller's obligation and is not checked;
    /// an inadmissible or negative heuristic risks a suboptimal plan but
    /// nothing worse). With [`null_heuristic`](crate::core::null_heuristic)
    /// this is exactly uniform-cost search, expansion order included.
    pub fn astar(
        &mut self,
        problem: &P,
        heuristic: impl Fn(&P::State, &P) -> f64,
    ) -> Result<Plan<P::Action>, SearchError> {
        self.explore(problem, PriorityFrontier::new(), |state, cost| {
            cost + heuristic(state, problem)
        })
    }

    /// Statistics from the most recent run.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// States in the order they were expanded during the most recent run.
    ///
    /// A state appears at most once: the closed list admits each state to
    /// expansion a single time.
    #[must_use]
    pub fn expansion_order(&self) -> &[P::State] {
        &self.expanded
    }

    /// The shared loop, parameterized by frontier ordering and priority.
    fn explore<F>(
        &mut self,
        problem: &P,
        mut frontier: F,
        priority: impl Fn(&P::State, f64) -> f64,
    ) -> Result<Plan<P::Action>, SearchError>
    where
        F: Frontier<SearchNode<P::State, P::Action>>,
    {
        let start = Instant::now();
        self.stats.reset();
        self.expanded.clear();

        let mut visited: FxHashSet<P::State> = FxHashSet::default();

        let root = SearchNode::root(problem.start());
        let root_priority = priority(&root.state, root.cost);
        frontier.push(root, root_priority);
        self.stats.nodes_generated += 1;
        self.stats.max_frontier = 1;

        while let Some(node) = frontier.pop() {
            if problem.is_goal(&node.state) {
                self.stats.time_us = start.elapsed().as_micros() as u64;
                return Ok(Plan {
                    actions: node.path,
                    cost: node.cost,
                });
            }

            if visited.insert(node.state.clone()) {
                self.expanded.push(node.state.clone());
                self.stats.nodes_expanded += 1;

                for successor in problem.successors(&node.state) {
                    let child = node.extend(successor);
                    let child_priority = priority(&child.state, child.cost);
                    frontier.push(child, child_priority);
                    self.stats.nodes_generated += 1;
                }

                if frontier.len() > self.stats.max_frontier {
                    self.stats.max_frontier = frontier.len();
                }
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        Err(SearchError::NoSolution)
    }
}

/// Depth-first search over `problem`. See [`Search::depth_first`].
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> Result<Plan<P::Action>, SearchError> {
    Search::new().depth_first(problem)
}

/// Breadth-first search over `problem`. See [`Search::breadth_first`].
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> Result<Plan<P::Action>, SearchError> {
    Search::new().breadth_first(problem)
}

/// Uniform-cost search over `problem`. See [`Search::uniform_cost`].
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> Result<Plan<P::Action>, SearchError> {
    Search::new().uniform_cost(problem)
}

/// A* search over `problem`. See [`Search::astar`].
pub fn astar_search<P: SearchProblem>(
    problem: &P,
    heuristic: impl Fn(&P::State, &P) -> f64,
) -> Result<Plan<P::Action>, SearchError> {
    Search::new().astar(problem, heuristic)
}
