//! The abstract transition-problem contract.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;

/// An abstract transition problem: the state space surface every search
/// algorithm operates on.
///
/// A domain implements this trait once and plugs into all algorithms
/// uninvasively. `result` must be deterministic, and `actions` must never
/// yield an action that is invalid for the given state.
///
/// # Example
///
/// ```
/// use wayfinder_core::{Problem, Result};
///
/// /// A number line where the only goal is zero.
/// struct CountDown {
///     start: i64,
/// }
///
/// impl Problem for CountDown {
///     type State = i64;
///     type Action = i64;
///     type Key = i64;
///
///     fn initial_state(&self) -> i64 {
///         self.start
///     }
///
///     fn actions(&self, _state: &i64) -> Vec<i64> {
///         vec![-1, 1]
///     }
///
///     fn result(&self, state: &i64, action: &i64) -> Result<i64> {
///         Ok(state + action)
///     }
///
///     fn is_goal(&self, state: &i64) -> bool {
///         *state == 0
///     }
///
///     fn state_key(&self, state: &i64) -> i64 {
///         *state
///     }
/// }
///
/// let problem = CountDown { start: 3 };
/// assert_eq!(problem.result(&3, &-1).unwrap(), 2);
/// ```
pub trait Problem {
    /// A complete configuration of the domain.
    type State: Clone + PartialEq + Debug;
    /// A domain operator transforming one state into another.
    type Action: Clone + PartialEq + Debug;
    /// Deduplication key derived from a state.
    type Key: Eq + Hash + Clone;

    /// Returns the state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Returns the actions available in `state`.
    ///
    /// The sequence is finite and its order is stable; depth-first
    /// variants use it for tie-breaking.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Applies `action` to `state` and returns the successor state.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SearchError::InvalidAction`] if `action` is not
    /// valid for `state`. Algorithms only apply actions obtained from
    /// [`Problem::actions`], which never produces an invalid one.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Result<Self::State>;

    /// Returns the cost of taking `action` in `state`, landing in
    /// `next_state`. Defaults to a unit cost.
    fn step_cost(
        &self,
        _state: &Self::State,
        _action: &Self::Action,
        _next_state: &Self::State,
    ) -> f64 {
        1.0
    }

    /// Returns true if `state` satisfies the goal condition.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Returns the deduplication key for `state`.
    fn state_key(&self, state: &Self::State) -> Self::Key;

    /// Renders `state` for diagnostics.
    fn display_state(&self, state: &Self::State) -> String {
        format!("{state:?}")
    }
}
