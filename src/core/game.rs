//! Game-tree abstraction for multi-agent adversarial search.
//!
//! Games implement `GameTree` to expose a turn-ordered state:
//! - How many agents take part and which actions each may take
//! - How the state evolves when an agent acts
//! - Win/loss terminal conditions
//!
//! Agent 0 is the maximizing agent; the remaining agents are modeled as
//! minimizers (or uniform-random chance agents under expectimax). One full
//! round through all agents is a *ply*.

use super::agent::AgentId;

/// Game-tree state trait.
///
/// Concrete board or game types implement this trait; the decision engine
/// consumes it together with a caller-supplied evaluation function.
///
/// ## Implementation Notes
///
/// - `legal_actions` returning empty at a non-terminal state is a contract
///   violation; the engine falls back to evaluating such states directly
/// - `successor` must be a pure function of `(state, agent, action)`
/// - `is_win` / `is_lose` are judged from the maximizing agent's viewpoint
pub trait GameTree: Sized {
    /// Action taken by one agent on its turn.
    type Action: Clone;

    /// Number of agents in the game. Must be at least 1.
    fn num_agents(&self) -> usize;

    /// Legal actions for `agent` in this state.
    fn legal_actions(&self, agent: AgentId) -> Vec<Self::Action>;

    /// The state after `agent` takes `action`.
    fn successor(&self, agent: AgentId, action: &Self::Action) -> Self;

    /// Whether this state is a win for the maximizing agent.
    fn is_win(&self) -> bool;

    /// Whether this state is a loss for the maximizing agent.
    fn is_lose(&self) -> bool;

    /// Whether this state ends the game.
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One-agent countdown: wins at 0, acts by decrementing.
    #[derive(Clone)]
    struct Countdown(i32);

    impl GameTree for Countdown {
        type Action = ();

        fn num_agents(&self) -> usize {
            1
        }

        fn legal_actions(&self, _agent: AgentId) -> Vec<()> {
            if self.is_terminal() {
                vec![]
            } else {
                vec![()]
            }
        }

        fn successor(&self, _agent: AgentId, _action: &()) -> Self {
            Countdown(self.0 - 1)
        }

        fn is_win(&self) -> bool {
            self.0 == 0
        }

        fn is_lose(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_terminal_default_combines_win_and_lose() {
        assert!(Countdown(0).is_terminal());
        assert!(!Countdown(3).is_terminal());
    }

    #[test]
    fn test_successor_steps_state() {
        let game = Countdown(2);
        let next = game.successor(AgentId::MAX_AGENT, &());
        assert_eq!(next.0, 1);
    }
}
