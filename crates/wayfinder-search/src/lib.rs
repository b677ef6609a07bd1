//! Wayfinder Search Strategies
//!
//! This crate provides the six search strategies of the framework behind
//! the [`wayfinder_core::SearchAlgorithm`] contract:
//! - Informed graph search: A*, greedy best-first, IDA*
//! - Local search: hill climbing, simulated annealing, genetic

pub mod frontier;
pub mod informed;
pub mod local;

pub use frontier::Frontier;
pub use informed::{AStarSearch, GreedyBestFirstSearch, IdaStarSearch};
pub use local::{GeneticAlgorithmSearch, HillClimbingSearch, SimulatedAnnealingSearch};
