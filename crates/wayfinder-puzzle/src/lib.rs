//! Wayfinder Puzzle Domain
//!
//! The classic sliding-tile puzzle as a [`wayfinder_core::Problem`]
//! implementation, together with the grid heuristics that guide informed
//! search over it.

pub mod heuristic;
pub mod puzzle;

pub use heuristic::{LinearConflict, ManhattanDistance, MisplacedTiles};
pub use puzzle::{SlideAction, SlidingPuzzle, Tiles};
