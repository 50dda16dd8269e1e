//! One-ply reflex decision.
//!
//! A reflex agent scores each legal root action with a caller-supplied
//! `(state, action)` function and takes the best, with no lookahead.
//! Useful as a baseline opponent and as the cheapest decision rule the
//! crate offers.

use smallvec::SmallVec;

use crate::core::{AgentId, GameTree, SeededRng};

use super::engine::DecisionError;

/// How ties among equally scored actions are resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TieBreak {
    /// Keep the first best-scoring action (deterministic, the default).
    First,

    /// Choose uniformly among the best-scoring actions with a seeded RNG.
    /// Reproducible for a fixed seed; intended for presentation-style
    /// agents that should not always open identically.
    Seeded(u64),
}

impl Default for TieBreak {
    fn default() -> Self {
        TieBreak::First
    }
}

/// Choose the best-scoring immediate action for the maximizing agent.
///
/// Errs with [`DecisionError::NoLegalActions`] when the maximizer has no
/// moves.
pub fn reflex_decide<G: GameTree>(
    state: &G,
    score: impl Fn(&G, &G::Action) -> f64,
    tie_break: TieBreak,
) -> Result<G::Action, DecisionError> {
    let actions = state.legal_actions(AgentId::MAX_AGENT);
    if actions.is_empty() {
        return Err(DecisionError::NoLegalActions);
    }

    let scores: SmallVec<[f64; 16]> = actions
        .iter()
        .map(|action| score(state, action))
        .collect();

    let best = scores
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    let tied: SmallVec<[usize; 16]> = scores
        .iter()
        .enumerate()
        .filter(|(_, &s)| s == best)
        .map(|(i, _)| i)
        .collect();

    let chosen = match tie_break {
        TieBreak::First => tied[0],
        TieBreak::Seeded(seed) => *SeededRng::new(seed)
            .choose(&tied)
            .unwrap_or(&tied[0]),
    };

    Ok(actions[chosen].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Maximizer picks one of N slots; no dynamics beyond recording it.
    #[derive(Clone)]
    struct Slots {
        picked: Option<u8>,
        count: u8,
    }

    impl GameTree for Slots {
        type Action = u8;

        fn num_agents(&self) -> usize {
            1
        }

        fn legal_actions(&self, _agent: AgentId) -> Vec<u8> {
            if self.picked.is_some() {
                vec![]
            } else {
                (0..self.count).collect()
            }
        }

        fn successor(&self, _agent: AgentId, action: &u8) -> Self {
            Slots {
                picked: Some(*action),
                count: self.count,
            }
        }

        fn is_win(&self) -> bool {
            false
        }

        fn is_lose(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_reflex_picks_highest_score() {
        let game = Slots {
            picked: None,
            count: 4,
        };

        let action =
            reflex_decide(&game, |_, a| if *a == 2 { 10.0 } else { 0.0 }, TieBreak::First)
                .unwrap();
        assert_eq!(action, 2);
    }

    #[test]
    fn test_reflex_first_tie_break() {
        let game = Slots {
            picked: None,
            count: 4,
        };

        let action = reflex_decide(&game, |_, _| 1.0, TieBreak::First).unwrap();
        assert_eq!(action, 0);
    }

    #[test]
    fn test_reflex_seeded_tie_break_is_reproducible() {
        let game = Slots {
            picked: None,
            count: 8,
        };

        let a = reflex_decide(&game, |_, _| 1.0, TieBreak::Seeded(99)).unwrap();
        let b = reflex_decide(&game, |_, _| 1.0, TieBreak::Seeded(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_reflex_seeded_only_picks_among_best() {
        let game = Slots {
            picked: None,
            count: 6,
        };

        // Only even slots score best
        for seed in 0..20 {
            let action = reflex_decide(
                &game,
                |_, a| if a % 2 == 0 { 5.0 } else { 1.0 },
                TieBreak::Seeded(seed),
            )
            .unwrap();
            assert_eq!(action % 2, 0);
        }
    }

    #[test]
    fn test_reflex_no_actions() {
        let game = Slots {
            picked: Some(1),
            count: 4,
        };

        assert_eq!(
            reflex_decide(&game, |_, _| 0.0, TieBreak::First),
            Err(DecisionError::NoLegalActions)
        );
    }
}
