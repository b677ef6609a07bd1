//! Error types for wayfinder

use thiserror::Error;

/// Main error type for wayfinder operations.
///
/// Running out of a resource budget (frontier exhaustion, step or
/// generation limits, temperature floor) is a normal search outcome and
/// is reported through [`crate::SearchResult`], never as an error.
#[derive(Debug, Error)]
pub enum SearchError {
    /// An action was applied to a state it is not valid for.
    #[error("invalid action {action} for state {state}")]
    InvalidAction {
        /// Rendering of the offending action.
        action: String,
        /// Rendering of the state it was applied to.
        state: String,
    },

    /// Error in the caller-assembled configuration (unknown algorithm or
    /// heuristic selection).
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for wayfinder operations
pub type Result<T> = std::result::Result<T, SearchError>;
