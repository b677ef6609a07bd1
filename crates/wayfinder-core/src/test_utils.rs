//! Test fixtures shared by this crate's test modules.

use crate::error::{Result, SearchError};
use crate::problem::Problem;

/// A bounded number line from 0 to [`CountingLine::LIMIT`] where the only
/// moves are one step down or one step up, enumerated in that order.
#[derive(Debug, Clone)]
pub struct CountingLine {
    start: i64,
    goal: i64,
}

impl CountingLine {
    /// Upper end of the line; the lower end is 0.
    pub const LIMIT: i64 = 9;

    pub fn new(start: i64, goal: i64) -> Self {
        Self { start, goal }
    }
}

impl Problem for CountingLine {
    type State = i64;
    type Action = i64;
    type Key = i64;

    fn initial_state(&self) -> i64 {
        self.start
    }

    fn actions(&self, state: &i64) -> Vec<i64> {
        let mut actions = Vec::with_capacity(2);
        if *state > 0 {
            actions.push(-1);
        }
        if *state < Self::LIMIT {
            actions.push(1);
        }
        actions
    }

    fn result(&self, state: &i64, action: &i64) -> Result<i64> {
        let next = state + action;
        if action.abs() != 1 || !(0..=Self::LIMIT).contains(&next) {
            return Err(SearchError::InvalidAction {
                action: action.to_string(),
                state: state.to_string(),
            });
        }
        Ok(next)
    }

    fn is_goal(&self, state: &i64) -> bool {
        *state == self.goal
    }

    fn state_key(&self, state: &i64) -> i64 {
        *state
    }
}
