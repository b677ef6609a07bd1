//! The search agent orchestrator.

use tracing::debug;

use crate::algorithm::SearchAlgorithm;
use crate::error::Result;
use crate::problem::Problem;
use crate::result::SearchResult;

/// Binds one [`Problem`] to one [`SearchAlgorithm`] and invokes it.
#[derive(Debug)]
pub struct SearchAgent<P, A> {
    problem: P,
    algorithm: A,
}

impl<P: Problem, A: SearchAlgorithm<P>> SearchAgent<P, A> {
    /// Creates an agent for the given problem and algorithm.
    pub fn new(problem: P, algorithm: A) -> Self {
        Self { problem, algorithm }
    }

    /// Runs the bound algorithm against the bound problem.
    ///
    /// # Errors
    ///
    /// Propagates any error signalled by the problem during the search.
    pub fn solve(&mut self) -> Result<SearchResult<P::State, P::Action>> {
        debug!(algorithm = self.algorithm.name(), "starting search");
        let result = self.algorithm.search(&self.problem)?;
        debug!(
            algorithm = self.algorithm.name(),
            success = result.success(),
            nodes_expanded = result.nodes_expanded(),
            "search finished"
        );
        Ok(result)
    }

    /// Returns the bound problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Returns the bound algorithm.
    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }
}
