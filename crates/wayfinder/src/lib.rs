//! Wayfinder - A Heuristic State-Space Search Framework
//!
//! Given an abstract transition problem and a cost/heuristic model,
//! wayfinder finds or approximates a minimum-cost action sequence from
//! the initial state to a goal state, with six interchangeable search
//! strategies behind one contract.
//!
//! # Example
//!
//! ```
//! use wayfinder::prelude::*;
//!
//! let puzzle = SlidingPuzzle::scrambled(3, 12, 7);
//! let astar = AStarSearch::new(ManhattanDistance::for_puzzle(&puzzle));
//!
//! let mut agent = SearchAgent::new(puzzle, astar);
//! let result = agent.solve().unwrap();
//! assert!(result.success());
//! ```

// Core contracts
pub use wayfinder_core::{
    FnHeuristic, Heuristic, Node, Problem, Result, SearchAgent, SearchAlgorithm, SearchError,
    SearchResult,
};

// Search strategies
pub use wayfinder_search::{
    AStarSearch, Frontier, GeneticAlgorithmSearch, GreedyBestFirstSearch, HillClimbingSearch,
    IdaStarSearch, SimulatedAnnealingSearch,
};

// Sliding-tile puzzle domain
pub use wayfinder_puzzle::{
    LinearConflict, ManhattanDistance, MisplacedTiles, SlideAction, SlidingPuzzle, Tiles,
};

/// Batch-experiment orchestration and reporting.
pub mod benchmark {
    pub use wayfinder_benchmark::{
        build_algorithm, ConfigError, CsvExporter, ExperimentConfig, ExperimentResult,
        ExperimentRun, ExperimentRunner, MarkdownReport,
    };
}

pub mod prelude {
    pub use super::{
        AStarSearch, FnHeuristic, GeneticAlgorithmSearch, GreedyBestFirstSearch, Heuristic,
        HillClimbingSearch, IdaStarSearch, LinearConflict, ManhattanDistance, MisplacedTiles,
        Problem, SearchAgent, SearchAlgorithm, SimulatedAnnealingSearch, SlideAction,
        SlidingPuzzle,
    };
}
