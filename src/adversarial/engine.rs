//! Bounded-depth game-tree evaluation.
//!
//! The recursion walks `(depth, agent)` pairs explicitly: agent 0
//! maximizes, every later agent minimizes (or averages, under expectimax),
//! and depth increments only when the last agent in the round has moved.
//! A state is terminal when the depth limit is reached or the game reports
//! a win or loss; terminals are scored by the caller-supplied evaluation
//! function.
//!
//! The root is a maximizing node that additionally remembers which action
//! produced the running maximum; ties keep the first action scanned, so
//! decisions are deterministic.

use crate::core::{AgentId, GameTree};
use smallvec::SmallVec;

use super::config::{DecisionConfig, DecisionMode};
use super::stats::DecisionStats;

/// The root result: the chosen action and the value backing it up.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision<A> {
    /// First action achieving the root maximum.
    pub action: A,

    /// The root value under the configured mode.
    pub value: f64,
}

/// Decision failure taxonomy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionError {
    /// The maximizing agent has no legal action at the root, so no action
    /// can be recommended. Below the root this condition is absorbed by
    /// evaluating the offending state directly.
    NoLegalActions,
}

impl std::fmt::Display for DecisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecisionError::NoLegalActions => {
                write!(f, "no legal actions for the maximizing agent at the root")
            }
        }
    }
}

impl std::error::Error for DecisionError {}

/// Game-tree decision context.
///
/// Owns the configuration and per-call statistics; generic methods accept
/// any [`GameTree`] plus an evaluation function.
///
/// ## Example
///
/// ```
/// use rust_decision::adversarial::{DecisionConfig, DecisionMode, GameTreeSearch};
/// use rust_decision::games::{tictactoe_utility, TicTacToe};
///
/// let config = DecisionConfig::default()
///     .with_depth(9)
///     .with_mode(DecisionMode::AlphaBeta);
/// let mut search = GameTreeSearch::new(config);
///
/// // Perfect play from the empty board is a draw.
/// let decision = search.decide(&TicTacToe::new(), tictactoe_utility).unwrap();
/// assert_eq!(decision.value, 0.0);
/// ```
pub struct GameTreeSearch {
    /// Decision configuration.
    config: DecisionConfig,

    /// Statistics from the most recent `decide` call.
    stats: DecisionStats,
}

impl GameTreeSearch {
    /// Create a new decision context.
    #[must_use]
    pub fn new(config: DecisionConfig) -> Self {
        Self {
            config,
            stats: DecisionStats::new(),
        }
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// Statistics from the most recent `decide` call.
    #[must_use]
    pub fn stats(&self) -> &DecisionStats {
        &self.stats
    }

    /// Choose an action for the maximizing agent.
    ///
    /// Returns the first action achieving the root maximum together with
    /// the root value. Errs with [`DecisionError::NoLegalActions`] when the
    /// root state is terminal or offers the maximizer no moves.
    pub fn decide<G: GameTree>(
        &mut self,
        state: &G,
        evaluate: impl Fn(&G) -> f64,
    ) -> Result<Decision<G::Action>, DecisionError> {
        self.stats.reset();

        let actions = state.legal_actions(AgentId::MAX_AGENT);
        if state.is_terminal() || actions.is_empty() {
            return Err(DecisionError::NoLegalActions);
        }

        self.stats.nodes_visited += 1;

        let num_agents = state.num_agents();
        let (next_depth, next_agent) = advance(0, AgentId::MAX_AGENT, num_agents);

        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best_value = f64::NEG_INFINITY;
        let mut best_action = None;

        for action in actions {
            let successor = state.successor(AgentId::MAX_AGENT, &action);
            let value = self.value(&successor, next_depth, next_agent, &evaluate, alpha, beta);

            // Strict comparison keeps the first action on ties
            if value > best_value || best_action.is_none() {
                best_value = value;
                best_action = Some(action);
            }

            if self.config.mode == DecisionMode::AlphaBeta {
                alpha = alpha.max(best_value);
            }
        }

        Ok(Decision {
            // best_action is set on the first iteration and actions is non-empty
            action: best_action.ok_or(DecisionError::NoLegalActions)?,
            value: best_value,
        })
    }

    /// Recursive node value under the configured mode.
    fn value<G: GameTree>(
        &mut self,
        state: &G,
        depth: u32,
        agent: AgentId,
        evaluate: &impl Fn(&G) -> f64,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.stats.nodes_visited += 1;

        if depth == self.config.depth || state.is_terminal() {
            self.stats.leaves_evaluated += 1;
            return evaluate(state);
        }

        let actions = state.legal_actions(agent);
        if actions.is_empty() {
            // Malformed game contract: non-terminal state with no moves.
            // Defined fallback: score the state as if it were terminal.
            self.stats.leaves_evaluated += 1;
            return evaluate(state);
        }

        let num_agents = state.num_agents();
        let (next_depth, next_agent) = advance(depth, agent, num_agents);
        let pruning = self.config.mode == DecisionMode::AlphaBeta;

        if agent.is_maximizer() {
            let mut best = f64::NEG_INFINITY;

            for action in &actions {
                let successor = state.successor(agent, action);
                let value =
                    self.value(&successor, next_depth, next_agent, evaluate, alpha, beta);
                best = best.max(value);

                if pruning {
                    if best >= beta {
                        self.stats.cutoffs += 1;
                        break;
                    }
                    alpha = alpha.max(best);
                }
            }

            best
        } else if self.config.mode == DecisionMode::Expectimax {
            // Uniform-random opponent model: back up the mean
            let mut values: SmallVec<[f64; 8]> = SmallVec::new();

            for action in &actions {
                let successor = state.successor(agent, action);
                values.push(self.value(&successor, next_depth, next_agent, evaluate, alpha, beta));
            }

            values.iter().sum::<f64>() / values.len() as f64
        } else {
            let mut best = f64::INFINITY;

            for action in &actions {
                let successor = state.successor(agent, action);
                let value =
                    self.value(&successor, next_depth, next_agent, evaluate, alpha, beta);
                best = best.min(value);

                if pruning {
                    if best <= alpha {
                        self.stats.cutoffs += 1;
                        break;
                    }
                    beta = beta.min(best);
                }
            }

            best
        }
    }
}

/// The `(depth, agent)` pair for the node after `agent` moves.
///
/// Depth counts completed plies: it increments only when the last agent in
/// the round has moved, at which point the turn wraps to the maximizer.
fn advance(depth: u32, agent: AgentId, num_agents: usize) -> (u32, AgentId) {
    if agent.is_last(num_agents) {
        (depth + 1, AgentId::MAX_AGENT)
    } else {
        (depth, agent.next(num_agents))
    }
}
