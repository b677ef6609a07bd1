//! The sliding-tile puzzle domain.

use std::fmt;
use std::fmt::Write as _;

use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

use wayfinder_core::{Problem, Result, SearchError};

/// Row-major tile arrangement; `0` is the blank. Boards up to 4x4 stay
/// inline.
pub type Tiles = SmallVec<[u8; 16]>;

/// A move of the blank tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideAction {
    Up,
    Down,
    Left,
    Right,
}

impl SlideAction {
    /// The complete action alphabet, in the domain's enumeration order.
    pub const ALL: [SlideAction; 4] = [
        SlideAction::Up,
        SlideAction::Down,
        SlideAction::Left,
        SlideAction::Right,
    ];

    /// Returns the move that undoes this one.
    pub fn opposite(self) -> Self {
        match self {
            SlideAction::Up => SlideAction::Down,
            SlideAction::Down => SlideAction::Up,
            SlideAction::Left => SlideAction::Right,
            SlideAction::Right => SlideAction::Left,
        }
    }

    /// Row and column offset of the blank for this move.
    fn offset(self) -> (i64, i64) {
        match self {
            SlideAction::Up => (-1, 0),
            SlideAction::Down => (1, 0),
            SlideAction::Left => (0, -1),
            SlideAction::Right => (0, 1),
        }
    }
}

impl fmt::Display for SlideAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideAction::Up => write!(f, "UP"),
            SlideAction::Down => write!(f, "DOWN"),
            SlideAction::Left => write!(f, "LEFT"),
            SlideAction::Right => write!(f, "RIGHT"),
        }
    }
}

/// A square sliding-tile puzzle of side `size >= 2`.
///
/// # Example
///
/// ```
/// use wayfinder_core::Problem;
/// use wayfinder_puzzle::SlidingPuzzle;
///
/// let puzzle = SlidingPuzzle::scrambled(3, 10, 42);
/// let state = puzzle.initial_state();
/// assert_eq!(state.len(), 9);
/// assert!(!puzzle.actions(&state).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct SlidingPuzzle {
    size: usize,
    initial: Tiles,
    goal: Tiles,
}

impl SlidingPuzzle {
    /// Creates a puzzle with explicit initial and goal arrangements.
    ///
    /// # Panics
    ///
    /// Panics if `size < 2`.
    pub fn new(size: usize, initial: Tiles, goal: Tiles) -> Self {
        assert!(size >= 2, "puzzle size must be at least 2x2");
        Self {
            size,
            initial,
            goal,
        }
    }

    /// Creates an already-solved puzzle: the initial state is the
    /// default goal `(1, 2, ..., n*n - 1, 0)`.
    pub fn solved(size: usize) -> Self {
        let goal = Self::default_goal(size);
        Self::new(size, goal.clone(), goal)
    }

    /// Creates a puzzle scrambled by `scramble_depth` uniformly random
    /// legal moves from the goal.
    ///
    /// The scramble uses a `ChaCha8Rng`, so a given seed produces the
    /// same instance on every platform.
    pub fn scrambled(size: usize, scramble_depth: usize, seed: u64) -> Self {
        let base = Self::solved(size);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = base.goal.clone();
        for _ in 0..scramble_depth {
            let actions = base.actions(&state);
            if let Some(action) = actions.choose(&mut rng) {
                if let Ok(next) = base.result(&state, action) {
                    state = next;
                }
            }
        }
        Self {
            size,
            initial: state,
            goal: base.goal,
        }
    }

    fn default_goal(size: usize) -> Tiles {
        let count = size * size;
        let mut goal: Tiles = (1..count).map(|tile| tile as u8).collect();
        goal.push(0);
        goal
    }

    /// Returns the board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the goal arrangement.
    pub fn goal_state(&self) -> &Tiles {
        &self.goal
    }

    fn blank_position(&self, state: &Tiles) -> Option<(usize, usize)> {
        state
            .iter()
            .position(|&tile| tile == 0)
            .map(|index| (index / self.size, index % self.size))
    }
}

impl Problem for SlidingPuzzle {
    type State = Tiles;
    type Action = SlideAction;
    type Key = Tiles;

    fn initial_state(&self) -> Tiles {
        self.initial.clone()
    }

    fn actions(&self, state: &Tiles) -> Vec<SlideAction> {
        let Some((row, col)) = self.blank_position(state) else {
            return Vec::new();
        };

        let mut actions = Vec::with_capacity(4);
        if row > 0 {
            actions.push(SlideAction::Up);
        }
        if row < self.size - 1 {
            actions.push(SlideAction::Down);
        }
        if col > 0 {
            actions.push(SlideAction::Left);
        }
        if col < self.size - 1 {
            actions.push(SlideAction::Right);
        }
        actions
    }

    fn result(&self, state: &Tiles, action: &SlideAction) -> Result<Tiles> {
        let invalid = || SearchError::InvalidAction {
            action: action.to_string(),
            state: self.display_state(state),
        };

        let (row, col) = self.blank_position(state).ok_or_else(invalid)?;
        let (row_offset, col_offset) = action.offset();
        let new_row = row as i64 + row_offset;
        let new_col = col as i64 + col_offset;

        let side = self.size as i64;
        if !(0..side).contains(&new_row) || !(0..side).contains(&new_col) {
            return Err(invalid());
        }

        let blank = row * self.size + col;
        let swap = (new_row as usize) * self.size + new_col as usize;
        let mut next = state.clone();
        next.swap(blank, swap);
        Ok(next)
    }

    fn is_goal(&self, state: &Tiles) -> bool {
        *state == self.goal
    }

    fn state_key(&self, state: &Tiles) -> Tiles {
        state.clone()
    }

    fn display_state(&self, state: &Tiles) -> String {
        let mut out = String::new();
        for row in 0..self.size {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..self.size {
                if col > 0 {
                    out.push(' ');
                }
                match state.get(row * self.size + col).copied() {
                    Some(0) => out.push_str(" ."),
                    Some(tile) => {
                        let _ = write!(out, "{tile:2}");
                    }
                    None => out.push_str(" ?"),
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn default_goal_places_blank_last() {
        let puzzle = SlidingPuzzle::solved(3);
        let expected: Tiles = smallvec![1, 2, 3, 4, 5, 6, 7, 8, 0];
        assert_eq!(*puzzle.goal_state(), expected);
        assert!(puzzle.is_goal(&puzzle.initial_state()));
    }

    #[test]
    fn corner_blank_has_two_actions_in_fixed_order() {
        let puzzle = SlidingPuzzle::solved(3);
        // Blank in the bottom-right corner: only UP and LEFT.
        let actions = puzzle.actions(&puzzle.initial_state());
        assert_eq!(actions, vec![SlideAction::Up, SlideAction::Left]);
    }

    #[test]
    fn center_blank_has_all_four_actions() {
        let puzzle = SlidingPuzzle::solved(3);
        let state: Tiles = smallvec![1, 2, 3, 4, 0, 5, 6, 7, 8];
        assert_eq!(puzzle.actions(&state), SlideAction::ALL.to_vec());
    }

    #[test]
    fn result_swaps_blank_with_neighbor() {
        let puzzle = SlidingPuzzle::solved(3);
        let state: Tiles = smallvec![1, 2, 3, 4, 5, 6, 7, 8, 0];
        let next = puzzle.result(&state, &SlideAction::Left).unwrap();
        let expected: Tiles = smallvec![1, 2, 3, 4, 5, 6, 7, 0, 8];
        assert_eq!(next, expected);
    }

    #[test]
    fn illegal_move_is_an_invalid_action_error() {
        let puzzle = SlidingPuzzle::solved(3);
        // Blank is bottom-right; DOWN leaves the board.
        let err = puzzle
            .result(&puzzle.initial_state(), &SlideAction::Down)
            .unwrap_err();
        assert!(matches!(err, SearchError::InvalidAction { .. }));
    }

    #[test]
    fn opposite_moves_cancel() {
        let puzzle = SlidingPuzzle::solved(3);
        let state: Tiles = smallvec![1, 2, 3, 4, 0, 5, 6, 7, 8];
        for action in SlideAction::ALL {
            let there = puzzle.result(&state, &action).unwrap();
            let back = puzzle.result(&there, &action.opposite()).unwrap();
            assert_eq!(back, state);
        }
    }

    #[test]
    fn scramble_is_reproducible_and_stays_solvable_distance() {
        let first = SlidingPuzzle::scrambled(3, 20, 123);
        let second = SlidingPuzzle::scrambled(3, 20, 123);
        assert_eq!(first.initial_state(), second.initial_state());

        let unscrambled = SlidingPuzzle::scrambled(3, 0, 123);
        assert!(unscrambled.is_goal(&unscrambled.initial_state()));
    }

    #[test]
    fn display_marks_the_blank() {
        let puzzle = SlidingPuzzle::solved(2);
        let state: Tiles = smallvec![1, 2, 3, 0];
        let rendered = puzzle.display_state(&state);
        assert_eq!(rendered, " 1  2\n 3  .");
    }
}
