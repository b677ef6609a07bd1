//! Named catalog of ready-made algorithm setups.

use wayfinder_core::{Result, SearchAlgorithm, SearchError};
use wayfinder_puzzle::{LinearConflict, ManhattanDistance, MisplacedTiles, SlideAction, SlidingPuzzle};
use wayfinder_search::{
    AStarSearch, GeneticAlgorithmSearch, GreedyBestFirstSearch, HillClimbingSearch,
    IdaStarSearch, SimulatedAnnealingSearch,
};

/// Builds the algorithm registered under `name` for the given puzzle.
///
/// The heuristics are constructed against the puzzle's goal
/// configuration.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an unknown name; selecting an
/// algorithm is the caller's configuration concern, never a panic.
pub fn build_algorithm(
    name: &str,
    puzzle: &SlidingPuzzle,
) -> Result<Box<dyn SearchAlgorithm<SlidingPuzzle>>> {
    let misplaced = || MisplacedTiles::for_puzzle(puzzle);
    let manhattan = || ManhattanDistance::for_puzzle(puzzle);
    let linear = || LinearConflict::for_puzzle(puzzle);

    let algorithm: Box<dyn SearchAlgorithm<SlidingPuzzle>> = match name {
        "astar_misplaced" => Box::new(AStarSearch::new(misplaced())),
        "astar_manhattan" => Box::new(AStarSearch::new(manhattan())),
        "astar_weighted" => Box::new(AStarSearch::with_weight(manhattan(), 1.5)),
        "astar_linear" => Box::new(AStarSearch::new(linear())),
        "greedy_manhattan" => Box::new(GreedyBestFirstSearch::new(manhattan())),
        "hill_climbing_manhattan" => Box::new(HillClimbingSearch::new(manhattan(), 2000)),
        "sa_manhattan" => Box::new(SimulatedAnnealingSearch::new(manhattan(), 10.0, 0.99, 5000)),
        "idastar_manhattan" => Box::new(IdaStarSearch::new(manhattan())),
        "idastar_linear" => Box::new(IdaStarSearch::new(linear())),
        "genetic_manhattan" => Box::new(GeneticAlgorithmSearch::new(
            manhattan(),
            SlideAction::ALL.to_vec(),
        )),
        _ => return Err(SearchError::Config(format!("unknown algorithm: {name}"))),
    };
    Ok(algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_name_builds() {
        let puzzle = SlidingPuzzle::solved(3);
        for name in [
            "astar_misplaced",
            "astar_manhattan",
            "astar_weighted",
            "astar_linear",
            "greedy_manhattan",
            "hill_climbing_manhattan",
            "sa_manhattan",
            "idastar_manhattan",
            "idastar_linear",
            "genetic_manhattan",
        ] {
            assert!(build_algorithm(name, &puzzle).is_ok(), "{name} missing");
        }
    }

    #[test]
    fn unknown_name_is_a_config_error() {
        let puzzle = SlidingPuzzle::solved(3);
        let err = build_algorithm("astar_euclidean", &puzzle).err().unwrap();
        assert!(matches!(err, SearchError::Config(_)));
    }
}
