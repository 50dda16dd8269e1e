//! Explicit-graph search problem.
//!
//! An adjacency-list problem for small, fully enumerated state graphs.
//! Mostly useful in tests and examples where exact costs and expansion
//! orders matter.

use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{SearchProblem, Successor};

/// Search problem over an explicit directed graph.
///
/// Nodes are the states; the action labelling an edge is the destination
/// node, so each `(from, to)` pair carries exactly one cost and a plan's
/// actions replay unambiguously. Edges keep their insertion order, which
/// fixes successor order and therefore traversal order for every algorithm.
///
/// ## Example
///
/// ```
/// use rust_decision::problems::GraphProblem;
/// use rust_decision::search::uniform_cost_search;
///
/// let problem = GraphProblem::new('a')
///     .edge('a', 'b', 1.0)
///     .edge('b', 'c', 1.0)
///     .goal('c');
///
/// let plan = uniform_cost_search(&problem).unwrap();
/// assert_eq!(plan.actions, vec!['b', 'c']);
/// ```
#[derive(Clone, Debug)]
pub struct GraphProblem<N: Copy + Eq + Hash> {
    start: N,
    goals: FxHashSet<N>,
    edges: FxHashMap<N, Vec<(N, f64)>>,
}

impl<N: Copy + Eq + Hash> GraphProblem<N> {
    /// Create a graph problem rooted at `start`, with no edges or goals.
    #[must_use]
    pub fn new(start: N) -> Self {
        Self {
            start,
            goals: FxHashSet::default(),
            edges: FxHashMap::default(),
        }
    }

    /// Add a directed edge with the given step cost.
    ///
    /// Repeating a `(from, to)` pair replaces the earlier cost in place;
    /// the destination node is the action label, so parallel edges would
    /// make action replay ambiguous.
    pub fn edge(mut self, from: N, to: N, cost: f64) -> Self {
        assert!(cost >= 0.0, "step costs must be non-negative");
        let targets = self.edges.entry(from).or_default();
        match targets.iter_mut().find(|(dest, _)| *dest == to) {
            Some(entry) => entry.1 = cost,
            None => targets.push((to, cost)),
        }
        self
    }

    /// Mark a node as a goal.
    pub fn goal(mut self, node: N) -> Self {
        self.goals.insert(node);
        self
    }
}

impl<N: Copy + Eq + Hash> SearchProblem for GraphProblem<N> {
    type State = N;
    type Action = N;

    fn start(&self) -> N {
        self.start
    }

    fn is_goal(&self, state: &N) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &N) -> Vec<Successor<N, N>> {
        self.edges
            .get(state)
            .map(|targets| {
                targets
                    .iter()
                    .map(|&(to, cost)| Successor::new(to, to, cost))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{breadth_first_search, uniform_cost_search, SearchError};

    #[test]
    fn test_successors_preserve_insertion_order() {
        let problem = GraphProblem::new(0)
            .edge(0, 3, 1.0)
            .edge(0, 1, 1.0)
            .edge(0, 2, 1.0);

        let actions: Vec<_> = problem.successors(&0).into_iter().map(|s| s.action).collect();
        assert_eq!(actions, vec![3, 1, 2]);
    }

    #[test]
    fn test_goal_membership() {
        let problem = GraphProblem::new(0).goal(2).goal(5);
        assert!(problem.is_goal(&2));
        assert!(problem.is_goal(&5));
        assert!(!problem.is_goal(&0));
    }

    #[test]
    fn test_ucs_prefers_cheap_detour() {
        let problem = GraphProblem::new('a')
            .edge('a', 'z', 10.0)
            .edge('a', 'b', 1.0)
            .edge('b', 'z', 1.0)
            .goal('z');

        let plan = uniform_cost_search(&problem).unwrap();
        assert_eq!(plan.actions, vec!['b', 'z']);
        assert_eq!(plan.cost, 2.0);
    }

    #[test]
    fn test_repeated_edge_replaces_cost() {
        let problem = GraphProblem::new(0)
            .edge(0, 1, 4.5)
            .edge(0, 1, 0.0)
            .goal(1);

        // A single successor with the latest cost, not two parallel edges
        let successors = problem.successors(&0);
        assert_eq!(successors.len(), 1);
        assert_eq!(successors[0].step_cost, 0.0);

        // The returned plan replays to exactly its reported cost
        let plan = uniform_cost_search(&problem).unwrap();
        assert_eq!(plan.cost, 0.0);
        assert_eq!(problem.cost_of_actions(&plan.actions), Some(plan.cost));
    }

    #[test]
    fn test_repeated_edge_keeps_position_in_order() {
        let problem = GraphProblem::new(0)
            .edge(0, 3, 1.0)
            .edge(0, 1, 1.0)
            .edge(0, 3, 2.0);

        let actions: Vec<_> = problem.successors(&0).into_iter().map(|s| s.action).collect();
        assert_eq!(actions, vec![3, 1]);
    }

    #[test]
    fn test_disconnected_goal() {
        let problem = GraphProblem::new(0).edge(0, 1, 1.0).goal(9);
        assert_eq!(breadth_first_search(&problem), Err(SearchError::NoSolution));
    }

    #[test]
    #[should_panic(expected = "step costs must be non-negative")]
    fn test_negative_cost_rejected() {
        let _ = GraphProblem::new(0).edge(0, 1, -1.0);
    }
}
