//! Rectangular maze search problem.
//!
//! Unit-cost movement on a grid with walls; the position-search analog of
//! a maze layout. Construct programmatically or from an ASCII layout:
//!
//! ```
//! use rust_decision::problems::GridProblem;
//! use rust_decision::search::breadth_first_search;
//!
//! let maze = GridProblem::from_ascii(
//!     "%%%%%\n\
//!      %S..%\n\
//!      %.%.%\n\
//!      %..G%\n\
//!      %%%%%",
//! )
//! .unwrap();
//!
//! let plan = breadth_first_search(&maze).unwrap();
//! assert_eq!(plan.len(), 4);
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{SearchProblem, Successor};

/// Compass move on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    North,
    South,
    East,
    West,
}

impl Move {
    /// All four moves, in the order successors are generated.
    pub const ALL: [Move; 4] = [Move::North, Move::South, Move::East, Move::West];

    /// Coordinate delta `(dx, dy)`; north decreases `y` (up on the layout).
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Move::North => (0, -1),
            Move::South => (0, 1),
            Move::East => (1, 0),
            Move::West => (-1, 0),
        }
    }
}

/// Grid position `(x, y)`: `x` is the column, `y` the row from the top.
pub type Pos = (i32, i32);

/// Maze problem: reach the goal cell from the start cell, one step at a
/// time, at unit cost per step.
#[derive(Clone, Debug)]
pub struct GridProblem {
    width: i32,
    height: i32,
    walls: FxHashSet<Pos>,
    start: Pos,
    goal: Pos,
}

impl GridProblem {
    /// Create an open grid with the given bounds, start, and goal.
    #[must_use]
    pub fn new(width: i32, height: i32, start: Pos, goal: Pos) -> Self {
        assert!(width > 0 && height > 0, "grid must be non-empty");
        Self {
            width,
            height,
            walls: FxHashSet::default(),
            start,
            goal,
        }
    }

    /// Add a wall cell.
    pub fn wall(mut self, pos: Pos) -> Self {
        self.walls.insert(pos);
        self
    }

    /// Parse an ASCII layout: `%` walls, `S` start, `G` goal, anything
    /// else open floor. Rows may be ragged; missing cells are open.
    ///
    /// Returns `None` unless exactly one `S` and one `G` are present.
    pub fn from_ascii(layout: &str) -> Option<Self> {
        let mut walls = FxHashSet::default();
        let mut start = None;
        let mut goal = None;
        let mut width = 0;
        let mut height = 0;

        for (y, line) in layout.lines().enumerate() {
            let line = line.trim();
            height = y as i32 + 1;
            width = width.max(line.len() as i32);

            for (x, ch) in line.chars().enumerate() {
                let pos = (x as i32, y as i32);
                match ch {
                    '%' => {
                        walls.insert(pos);
                    }
                    'S' => {
                        if start.replace(pos).is_some() {
                            return None;
                        }
                    }
                    'G' => {
                        if goal.replace(pos).is_some() {
                            return None;
                        }
                    }
                    _ => {}
                }
            }
        }

        Some(Self {
            width,
            height,
            walls,
            start: start?,
            goal: goal?,
        })
    }

    /// The goal cell.
    #[must_use]
    pub fn goal_pos(&self) -> Pos {
        self.goal
    }

    fn open(&self, (x, y): Pos) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height && !self.walls.contains(&(x, y))
    }
}

impl SearchProblem for GridProblem {
    type State = Pos;
    type Action = Move;

    fn start(&self) -> Pos {
        self.start
    }

    fn is_goal(&self, state: &Pos) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Pos) -> Vec<Successor<Pos, Move>> {
        Move::ALL
            .iter()
            .filter_map(|&mv| {
                let (dx, dy) = mv.delta();
                let next = (state.0 + dx, state.1 + dy);
                self.open(next).then(|| Successor::new(next, mv, 1.0))
            })
            .collect()
    }
}

/// Manhattan distance to the goal cell.
///
/// Admissible for unit-cost four-way grids, so A* with this heuristic
/// returns minimum-cost plans.
pub fn manhattan_heuristic(state: &Pos, problem: &GridProblem) -> f64 {
    let (gx, gy) = problem.goal_pos();
    ((state.0 - gx).abs() + (state.1 - gy).abs()) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{astar_search, uniform_cost_search, SearchError};

    #[test]
    fn test_successors_respect_walls_and_bounds() {
        let grid = GridProblem::new(3, 3, (0, 0), (2, 2)).wall((1, 0));

        // Corner cell: north/west out of bounds, east walled
        let actions: Vec<_> = grid
            .successors(&(0, 0))
            .into_iter()
            .map(|s| s.action)
            .collect();
        assert_eq!(actions, vec![Move::South]);
    }

    #[test]
    fn test_from_ascii_round_trip_semantics() {
        let maze = GridProblem::from_ascii(
            "%%%\n\
             %S%\n\
             %.%\n\
             %G%\n\
             %%%",
        )
        .unwrap();

        assert_eq!(maze.start(), (1, 1));
        assert_eq!(maze.goal_pos(), (1, 3));
        assert!(!maze.open((0, 0)));
        assert!(maze.open((1, 2)));
    }

    #[test]
    fn test_from_ascii_requires_start_and_goal() {
        assert!(GridProblem::from_ascii("%%%\n%.%\n%%%").is_none());
        assert!(GridProblem::from_ascii("SS\nG.").is_none());
    }

    #[test]
    fn test_walled_off_goal_is_unsolvable() {
        let maze = GridProblem::from_ascii(
            "S.%G\n\
             ..%.",
        )
        .unwrap();

        assert_eq!(uniform_cost_search(&maze), Err(SearchError::NoSolution));
    }

    #[test]
    fn test_astar_with_manhattan_is_optimal() {
        let maze = GridProblem::from_ascii(
            "S....\n\
             .%%%.\n\
             .....\n\
             .%%%%\n\
             ....G",
        )
        .unwrap();

        let plan = astar_search(&maze, manhattan_heuristic).unwrap();
        let optimal = uniform_cost_search(&maze).unwrap();
        assert_eq!(plan.cost, optimal.cost);
    }

    #[test]
    fn test_manhattan_at_goal_is_zero() {
        let grid = GridProblem::new(4, 4, (0, 0), (3, 3));
        assert_eq!(manhattan_heuristic(&(3, 3), &grid), 0.0);
        assert_eq!(manhattan_heuristic(&(0, 0), &grid), 6.0);
    }
}
