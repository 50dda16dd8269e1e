//! Frontier node representation.

use crate::core::Successor;

/// One frontier entry: a state, the action sequence that reached it, and
/// the accumulated path cost.
///
/// Nodes are created fresh per expansion and never mutated afterwards;
/// each child owns its own path snapshot extended by exactly one action.
#[derive(Clone, Debug)]
pub struct SearchNode<S, A> {
    /// The state this node represents.
    pub state: S,

    /// Actions from the start state to `state`.
    pub path: Vec<A>,

    /// Sum of step costs along `path`.
    pub cost: f64,
}

impl<S, A: Clone> SearchNode<S, A> {
    /// The root node: start state, empty path, zero cost.
    pub fn root(state: S) -> Self {
        Self {
            state,
            path: Vec::new(),
            cost: 0.0,
        }
    }

    /// Child node for one successor of this node's state.
    pub fn extend(&self, successor: Successor<S, A>) -> Self {
        let mut path = self.path.clone();
        path.push(successor.action);

        Self {
            state: successor.state,
            path,
            cost: self.cost + successor.step_cost,
        }
    }
}
