//! 3x3 tic-tac-toe as a two-agent zero-sum game tree.
//!
//! The maximizing agent places `X`, the minimizing agent places `O`.
//! Terminal utility is `+1` for an `X` win, `-1` for an `O` win, `0`
//! otherwise. Small enough to solve exactly, which makes it the reference
//! game for the decision-engine tests: perfect play from the empty board
//! is a draw.

use serde::{Deserialize, Serialize};

use crate::core::{AgentId, GameTree};

/// A placed mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark the given agent places (agent 0 plays `X`).
    #[must_use]
    pub fn for_agent(agent: AgentId) -> Mark {
        if agent.is_maximizer() {
            Mark::X
        } else {
            Mark::O
        }
    }
}

/// The eight winning lines, as cell-index triples.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Tic-tac-toe board. Cells are indexed 0..9, row-major from the top left.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToe {
    cells: [Option<Mark>; 9],
}

impl TicTacToe {
    /// The empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Board with the given marks already placed. Panics on occupied cells
    /// or out-of-range indices; intended for tests and position setup.
    #[must_use]
    pub fn with_marks(marks: &[(u8, Mark)]) -> Self {
        let mut board = Self::new();
        for &(cell, mark) in marks {
            assert!(board.cells[cell as usize].is_none(), "cell already occupied");
            board.cells[cell as usize] = Some(mark);
        }
        board
    }

    /// The mark in a cell, if any.
    #[must_use]
    pub fn cell(&self, index: u8) -> Option<Mark> {
        self.cells[index as usize]
    }

    /// The winner, if any line is complete.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        for line in &LINES {
            if let Some(mark) = self.cells[line[0]] {
                if self.cells[line[1]] == Some(mark) && self.cells[line[2]] == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }

    /// Whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Whether the game is over (win, loss, or full-board draw).
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }
}

impl GameTree for TicTacToe {
    type Action = u8;

    fn num_agents(&self) -> usize {
        2
    }

    fn legal_actions(&self, _agent: AgentId) -> Vec<u8> {
        if self.winner().is_some() {
            return vec![];
        }
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i as u8)
            .collect()
    }

    fn successor(&self, agent: AgentId, action: &u8) -> Self {
        let mut next = self.clone();
        next.cells[*action as usize] = Some(Mark::for_agent(agent));
        next
    }

    fn is_win(&self) -> bool {
        self.winner() == Some(Mark::X)
    }

    fn is_lose(&self) -> bool {
        self.winner() == Some(Mark::O)
    }

    // A full board with no winner is also terminal, not merely actionless
    fn is_terminal(&self) -> bool {
        self.is_over()
    }
}

/// Zero-sum terminal utility: `+1` X win, `-1` O win, `0` otherwise.
pub fn tictactoe_utility(state: &TicTacToe) -> f64 {
    match state.winner() {
        Some(Mark::X) => 1.0,
        Some(Mark::O) => -1.0,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = TicTacToe::new();
        assert_eq!(board.winner(), None);
        assert!(!board.is_over());
        assert_eq!(board.legal_actions(AgentId::new(0)).len(), 9);
    }

    #[test]
    fn test_row_column_and_diagonal_wins() {
        let row = TicTacToe::with_marks(&[(3, Mark::X), (4, Mark::X), (5, Mark::X)]);
        assert_eq!(row.winner(), Some(Mark::X));
        assert!(row.is_win());

        let col = TicTacToe::with_marks(&[(1, Mark::O), (4, Mark::O), (7, Mark::O)]);
        assert_eq!(col.winner(), Some(Mark::O));
        assert!(col.is_lose());

        let diag = TicTacToe::with_marks(&[(2, Mark::X), (4, Mark::X), (6, Mark::X)]);
        assert_eq!(diag.winner(), Some(Mark::X));
    }

    #[test]
    fn test_no_moves_after_win() {
        let board = TicTacToe::with_marks(&[(0, Mark::X), (1, Mark::X), (2, Mark::X)]);
        assert!(board.legal_actions(AgentId::new(1)).is_empty());
    }

    #[test]
    fn test_successor_places_agent_mark() {
        let board = TicTacToe::new();
        let after_x = board.successor(AgentId::new(0), &4);
        assert_eq!(after_x.cell(4), Some(Mark::X));

        let after_o = after_x.successor(AgentId::new(1), &0);
        assert_eq!(after_o.cell(0), Some(Mark::O));
        // Originals untouched
        assert_eq!(board.cell(4), None);
    }

    #[test]
    fn test_draw_board_is_over_without_winner() {
        // X O X / X O O / O X X
        let board = TicTacToe::with_marks(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::X),
            (4, Mark::O),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::X),
        ]);

        assert_eq!(board.winner(), None);
        assert!(board.is_full());
        assert!(board.is_over());
        assert_eq!(tictactoe_utility(&board), 0.0);

        // Terminal as a game tree even though neither side won
        assert!(board.is_terminal());
        assert!(!board.is_win());
        assert!(!board.is_lose());
    }

    #[test]
    fn test_utility_signs() {
        let x_wins = TicTacToe::with_marks(&[(0, Mark::X), (4, Mark::X), (8, Mark::X)]);
        assert_eq!(tictactoe_utility(&x_wins), 1.0);

        let o_wins = TicTacToe::with_marks(&[(0, Mark::O), (1, Mark::O), (2, Mark::O)]);
        assert_eq!(tictactoe_utility(&o_wins), -1.0);
    }

    #[test]
    fn test_board_serialization() {
        let board = TicTacToe::with_marks(&[(0, Mark::X), (4, Mark::O)]);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: TicTacToe = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
