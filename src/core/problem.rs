//! Search problem abstraction.
//!
//! Problems implement `SearchProblem` to define an implicit state graph:
//! - Where the search starts
//! - Which states are goals
//! - How states expand into successors, and at what step cost
//!
//! The engine is generic over this trait and never inspects states beyond
//! equality and hashing. The state space may be infinite; termination then
//! depends on a reachable goal existing.

/// A single expansion result: the successor state, the action that
/// reaches it, and the non-negative incremental cost of that action.
#[derive(Clone, Debug, PartialEq)]
pub struct Successor<S, A> {
    /// The state reached by taking `action`.
    pub state: S,

    /// The action that produces `state` from the expanded state.
    pub action: A,

    /// Incremental cost of the action. Must be `>= 0`.
    pub step_cost: f64,
}

impl<S, A> Successor<S, A> {
    /// Create a successor triple.
    pub fn new(state: S, action: A, step_cost: f64) -> Self {
        Self {
            state,
            action,
            step_cost,
        }
    }
}

/// Search problem trait.
///
/// Concrete problems (mazes, grids, explicit graphs) implement this trait;
/// the search engine consumes it and nothing else.
///
/// ## Implementation Notes
///
/// - `successors` is called once per expansion; return every legal
///   successor with its step cost
/// - Step costs must be non-negative for the cost-ordered algorithms
///   to return optimal plans
/// - `State` equality and hashing define when two states are "the same"
///   for the visited set
pub trait SearchProblem {
    /// Opaque search state.
    type State: Clone + Eq + std::hash::Hash;

    /// Action labelling one edge of the state graph.
    type Action: Clone;

    /// The state the search starts from.
    fn start(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All successors of `state`.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of a full action sequence from the start state.
    ///
    /// Returns `None` if the sequence is not legal (some action has no
    /// matching edge). Used by callers for plan validation; the engine's
    /// internal loop accumulates costs incrementally and never calls this.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Option<f64>
    where
        Self::Action: PartialEq,
    {
        let mut state = self.start();
        let mut total = 0.0;

        for action in actions {
            let next = self
                .successors(&state)
                .into_iter()
                .find(|s| &s.action == action)?;
            total += next.step_cost;
            state = next.state;
        }

        Some(total)
    }
}

/// The trivial heuristic: estimates every state at zero cost-to-goal.
///
/// Admissible for any problem with non-negative costs; reduces A* to
/// uniform-cost search.
pub fn null_heuristic<P: SearchProblem>(_state: &P::State, _problem: &P) -> f64 {
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two-state line: 0 --go(2.5)--> 1, goal at 1.
    struct Line;

    impl SearchProblem for Line {
        type State = u32;
        type Action = &'static str;

        fn start(&self) -> u32 {
            0
        }

        fn is_goal(&self, state: &u32) -> bool {
            *state == 1
        }

        fn successors(&self, state: &u32) -> Vec<Successor<u32, &'static str>> {
            if *state == 0 {
                vec![Successor::new(1, "go", 2.5)]
            } else {
                vec![]
            }
        }
    }

    #[test]
    fn test_cost_of_actions_replays_plan() {
        let problem = Line;
        assert_eq!(problem.cost_of_actions(&["go"]), Some(2.5));
        assert_eq!(problem.cost_of_actions(&[]), Some(0.0));
    }

    #[test]
    fn test_cost_of_actions_rejects_illegal_plan() {
        let problem = Line;
        assert_eq!(problem.cost_of_actions(&["fly"]), None);
        assert_eq!(problem.cost_of_actions(&["go", "go"]), None);
    }

    #[test]
    fn test_null_heuristic_is_zero() {
        let problem = Line;
        assert_eq!(null_heuristic(&0, &problem), 0.0);
        assert_eq!(null_heuristic(&1, &problem), 0.0);
    }
}
