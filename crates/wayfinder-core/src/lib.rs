//! Wayfinder Core - Shared contracts for heuristic state-space search
//!
//! This crate provides the fundamental abstractions of the framework:
//! - The `Problem` trait describing an abstract transition system
//! - The `Heuristic` trait for cost-to-goal estimates
//! - The `Node` path-tracking entity and the `SearchResult` outcome record
//! - The `SearchAlgorithm` and `SearchAgent` contracts

pub mod agent;
pub mod algorithm;
pub mod error;
pub mod heuristic;
pub mod node;
pub mod problem;
pub mod result;

#[cfg(test)]
mod test_utils;

pub use agent::SearchAgent;
pub use algorithm::SearchAlgorithm;
pub use error::{Result, SearchError};
pub use heuristic::{FnHeuristic, Heuristic};
pub use node::Node;
pub use problem::Problem;
pub use result::SearchResult;
