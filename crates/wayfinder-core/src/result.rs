//! Search outcome records.

use std::rc::Rc;
use std::time::Duration;

use crate::node::Node;

/// The outcome of a single `search()` call.
///
/// Constructed once per search and immutable afterwards. Failing to find
/// a solution within the algorithm's resource bound is a normal outcome
/// (`success() == false`, no solution node), never an error.
#[derive(Debug)]
pub struct SearchResult<S, A> {
    solution_node: Option<Rc<Node<S, A>>>,
    success: bool,
    nodes_expanded: u64,
    runtime: Duration,
    iterations: u64,
}

impl<S, A> SearchResult<S, A> {
    /// Creates a successful result ending at `solution_node`.
    pub fn solved(solution_node: Rc<Node<S, A>>, nodes_expanded: u64, runtime: Duration) -> Self {
        Self {
            solution_node: Some(solution_node),
            success: true,
            nodes_expanded,
            runtime,
            iterations: 0,
        }
    }

    /// Creates a failed result with no solution node.
    pub fn failed(nodes_expanded: u64, runtime: Duration) -> Self {
        Self {
            solution_node: None,
            success: false,
            nodes_expanded,
            runtime,
            iterations: 0,
        }
    }

    /// Sets the iteration count reported by iterative algorithms.
    #[must_use]
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Returns the node that reached the goal, if any.
    #[inline]
    pub fn solution_node(&self) -> Option<&Rc<Node<S, A>>> {
        self.solution_node.as_ref()
    }

    /// Returns true if a goal was reached.
    #[inline]
    pub fn success(&self) -> bool {
        self.success
    }

    /// Returns the number of nodes expanded during the search.
    #[inline]
    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded
    }

    /// Returns the wall-clock runtime of the search.
    #[inline]
    pub fn runtime(&self) -> Duration {
        self.runtime
    }

    /// Returns the number of outer-loop iterations for iterative
    /// algorithms. Zero for tree search.
    #[inline]
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Returns the node sequence from root to goal, or an empty vector
    /// if there is no solution.
    pub fn solution_path(&self) -> Vec<Rc<Node<S, A>>> {
        match &self.solution_node {
            Some(node) => node.solution_path(),
            None => Vec::new(),
        }
    }

    /// Returns the path cost of the solution, or `+inf` if there is no
    /// solution.
    pub fn solution_cost(&self) -> f64 {
        match &self.solution_node {
            Some(node) => node.path_cost(),
            None => f64::INFINITY,
        }
    }

    /// Returns the action sequence of the solution, in order. Empty if
    /// there is no solution.
    pub fn solution_actions(&self) -> Vec<A>
    where
        A: Clone,
    {
        match &self.solution_node {
            Some(node) => node.actions_from_root(),
            None => Vec::new(),
        }
    }
}
