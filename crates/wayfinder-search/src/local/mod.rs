//! Local and population-based search strategies.
//!
//! These strategies walk or evolve a current candidate instead of
//! maintaining a frontier. They trade completeness and optimality for
//! speed and memory; running out of a step, temperature or generation
//! budget without reaching a goal is a normal failure outcome.

mod genetic;
mod hill_climbing;
mod simulated_annealing;

pub use genetic::GeneticAlgorithmSearch;
pub use hill_climbing::HillClimbingSearch;
pub use simulated_annealing::SimulatedAnnealingSearch;
