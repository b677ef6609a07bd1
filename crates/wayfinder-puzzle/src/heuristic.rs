//! Grid heuristics for the sliding-tile puzzle.
//!
//! Each heuristic is a small struct holding tables precomputed from the
//! goal arrangement at construction time; evaluation is pure and the
//! tables are read-only afterwards, so instances can be shared across
//! concurrent searches.

use wayfinder_core::Heuristic;

use crate::puzzle::{SlidingPuzzle, Tiles};

/// Number of non-blank tiles not on their goal cell.
///
/// Admissible but weak: every misplaced tile needs at least one move.
#[derive(Debug, Clone)]
pub struct MisplacedTiles {
    goal: Tiles,
}

impl MisplacedTiles {
    /// Creates the heuristic for an explicit goal arrangement.
    pub fn new(goal: Tiles) -> Self {
        Self { goal }
    }

    /// Creates the heuristic for a puzzle's goal.
    pub fn for_puzzle(puzzle: &SlidingPuzzle) -> Self {
        Self::new(puzzle.goal_state().clone())
    }
}

impl Heuristic<Tiles> for MisplacedTiles {
    fn evaluate(&self, state: &Tiles) -> f64 {
        let misplaced = state
            .iter()
            .zip(self.goal.iter())
            .filter(|(&tile, &goal_tile)| tile != 0 && tile != goal_tile)
            .count();
        misplaced as f64
    }
}

/// Sum of the row and column offsets of every non-blank tile from its
/// goal cell.
///
/// Admissible and consistent for unit-cost moves; the workhorse
/// heuristic for this domain.
#[derive(Debug, Clone)]
pub struct ManhattanDistance {
    size: usize,
    /// Goal `(row, col)` indexed by tile value.
    goal_positions: Vec<(usize, usize)>,
}

impl ManhattanDistance {
    /// Creates the heuristic for an explicit goal arrangement on a
    /// `size`-sided board.
    pub fn new(goal: &Tiles, size: usize) -> Self {
        let mut goal_positions = vec![(0, 0); goal.len()];
        for (index, &tile) in goal.iter().enumerate() {
            goal_positions[usize::from(tile)] = (index / size, index % size);
        }
        Self {
            size,
            goal_positions,
        }
    }

    /// Creates the heuristic for a puzzle's goal.
    pub fn for_puzzle(puzzle: &SlidingPuzzle) -> Self {
        Self::new(puzzle.goal_state(), puzzle.size())
    }

    /// Returns the goal cell of `tile`.
    fn goal_position(&self, tile: u8) -> (usize, usize) {
        self.goal_positions[usize::from(tile)]
    }
}

impl Heuristic<Tiles> for ManhattanDistance {
    fn evaluate(&self, state: &Tiles) -> f64 {
        let mut total = 0usize;
        for (index, &tile) in state.iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let (row, col) = (index / self.size, index % self.size);
            let (goal_row, goal_col) = self.goal_position(tile);
            total += row.abs_diff(goal_row) + col.abs_diff(goal_col);
        }
        total as f64
    }
}

/// Manhattan distance plus a linear-conflict term.
///
/// Two tiles conflict when both sit on their goal line (row or column)
/// with their goal order inverted; resolving each conflict costs two
/// extra moves. Dominates plain Manhattan distance while staying
/// admissible.
#[derive(Debug, Clone)]
pub struct LinearConflict {
    manhattan: ManhattanDistance,
    size: usize,
}

impl LinearConflict {
    /// Creates the heuristic for an explicit goal arrangement on a
    /// `size`-sided board.
    pub fn new(goal: &Tiles, size: usize) -> Self {
        Self {
            manhattan: ManhattanDistance::new(goal, size),
            size,
        }
    }

    /// Creates the heuristic for a puzzle's goal.
    pub fn for_puzzle(puzzle: &SlidingPuzzle) -> Self {
        Self::new(puzzle.goal_state(), puzzle.size())
    }

    /// Counts goal-order inversions among tiles already on their goal
    /// row, row by row.
    fn row_conflicts(&self, state: &Tiles) -> usize {
        let mut conflicts = 0;
        for row in 0..self.size {
            let mut goal_cols = Vec::new();
            for col in 0..self.size {
                let tile = state[row * self.size + col];
                if tile == 0 {
                    continue;
                }
                let (goal_row, goal_col) = self.manhattan.goal_position(tile);
                if goal_row == row {
                    goal_cols.push(goal_col);
                }
            }
            conflicts += count_inversions(&goal_cols);
        }
        conflicts
    }

    /// Counts goal-order inversions among tiles already on their goal
    /// column, column by column.
    fn column_conflicts(&self, state: &Tiles) -> usize {
        let mut conflicts = 0;
        for col in 0..self.size {
            let mut goal_rows = Vec::new();
            for row in 0..self.size {
                let tile = state[row * self.size + col];
                if tile == 0 {
                    continue;
                }
                let (goal_row, goal_col) = self.manhattan.goal_position(tile);
                if goal_col == col {
                    goal_rows.push(goal_row);
                }
            }
            conflicts += count_inversions(&goal_rows);
        }
        conflicts
    }
}

/// Pairs `(i, j)` with `i < j` whose values are strictly decreasing.
fn count_inversions(values: &[usize]) -> usize {
    let mut inversions = 0;
    for (i, &a) in values.iter().enumerate() {
        for &b in &values[i + 1..] {
            if a > b {
                inversions += 1;
            }
        }
    }
    inversions
}

impl Heuristic<Tiles> for LinearConflict {
    fn evaluate(&self, state: &Tiles) -> f64 {
        let conflicts = self.row_conflicts(state) + self.column_conflicts(state);
        self.manhattan.evaluate(state) + 2.0 * conflicts as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;
    use wayfinder_core::Problem;

    fn solved() -> SlidingPuzzle {
        SlidingPuzzle::solved(3)
    }

    #[test]
    fn all_heuristics_are_zero_at_the_goal() {
        let puzzle = solved();
        let goal = puzzle.initial_state();
        assert_eq!(MisplacedTiles::for_puzzle(&puzzle).evaluate(&goal), 0.0);
        assert_eq!(ManhattanDistance::for_puzzle(&puzzle).evaluate(&goal), 0.0);
        assert_eq!(LinearConflict::for_puzzle(&puzzle).evaluate(&goal), 0.0);
    }

    #[test]
    fn misplaced_ignores_the_blank() {
        let puzzle = solved();
        // Blank moved left: only tile 8 is off its cell.
        let state: Tiles = smallvec![1, 2, 3, 4, 5, 6, 7, 0, 8];
        assert_eq!(MisplacedTiles::for_puzzle(&puzzle).evaluate(&state), 1.0);
    }

    #[test]
    fn manhattan_sums_tile_offsets() {
        let puzzle = solved();
        // Tile 1 moved from (0,0) to (2,2) costs 4; the rest shifted by
        // one cell each.
        let state: Tiles = smallvec![2, 3, 6, 1, 5, 0, 4, 7, 8];
        let h = ManhattanDistance::for_puzzle(&puzzle).evaluate(&state);
        assert!(h >= 4.0);
        assert_eq!(h, h.trunc());
    }

    #[test]
    fn manhattan_of_single_slide_is_one() {
        let puzzle = solved();
        let state: Tiles = smallvec![1, 2, 3, 4, 5, 6, 7, 0, 8];
        assert_eq!(ManhattanDistance::for_puzzle(&puzzle).evaluate(&state), 1.0);
    }

    #[test]
    fn linear_conflict_counts_inverted_goal_rows() {
        let puzzle = solved();
        // Tiles 1 and 2 swapped in their goal row: one conflict.
        let state: Tiles = smallvec![2, 1, 3, 4, 5, 6, 7, 8, 0];
        let manhattan = ManhattanDistance::for_puzzle(&puzzle).evaluate(&state);
        let with_conflicts = LinearConflict::for_puzzle(&puzzle).evaluate(&state);
        assert_eq!(with_conflicts, manhattan + 2.0);
    }

    #[test]
    fn linear_conflict_dominates_manhattan_on_scrambles() {
        let manhattan = ManhattanDistance::for_puzzle(&solved());
        let linear = LinearConflict::for_puzzle(&solved());
        for seed in 0..20 {
            let puzzle = SlidingPuzzle::scrambled(3, 25, seed);
            let state = puzzle.initial_state();
            assert!(linear.evaluate(&state) >= manhattan.evaluate(&state));
            assert!(manhattan.evaluate(&state) >= 0.0);
        }
    }
}
