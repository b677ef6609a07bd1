//! The search strategy contract.

use crate::error::Result;
use crate::problem::Problem;
use crate::result::SearchResult;

/// A search strategy: consumes a [`Problem`] and produces a
/// [`SearchResult`].
///
/// All strategies are interchangeable behind this contract. A strategy
/// runs single-threaded and synchronously to completion; stochastic
/// strategies hold their own seedable random source, which is why
/// `search` takes `&mut self`.
pub trait SearchAlgorithm<P: Problem> {
    /// Runs the search to completion.
    ///
    /// # Errors
    ///
    /// Returns an error only if the problem itself signals one (for
    /// example an invalid action applied through `result`). Exhausting a
    /// resource bound without reaching a goal is reported through the
    /// result record, not as an error.
    fn search(&mut self, problem: &P) -> Result<SearchResult<P::State, P::Action>>;

    /// Returns the strategy's display name.
    fn name(&self) -> &'static str;
}

impl<P: Problem, T: SearchAlgorithm<P> + ?Sized> SearchAlgorithm<P> for Box<T> {
    fn search(&mut self, problem: &P) -> Result<SearchResult<P::State, P::Action>> {
        (**self).search(problem)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
