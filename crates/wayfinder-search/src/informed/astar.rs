//! Weighted A* graph search.

use std::collections::HashMap;
use std::rc::Rc;
use std::time::Instant;

use tracing::debug;

use wayfinder_core::{Heuristic, Node, Problem, Result, SearchAlgorithm, SearchResult};

use crate::frontier::Frontier;

/// A* graph search over `f = g + weight * h`.
///
/// Keeps a map from state key to the best known path cost. A popped node
/// whose cost is already beaten by a recorded better cost is discarded
/// without expansion (lazy deletion), and a child is pushed whenever no
/// better-or-equal cost is known for its key. Re-opening an
/// already-expanded key on a cost improvement is permitted, which keeps
/// the search correct under inconsistent heuristics.
///
/// # Example
///
/// ```
/// use wayfinder_core::SearchAlgorithm;
/// use wayfinder_puzzle::{ManhattanDistance, SlidingPuzzle};
/// use wayfinder_search::AStarSearch;
///
/// let puzzle = SlidingPuzzle::scrambled(3, 8, 7);
/// let mut astar = AStarSearch::new(ManhattanDistance::for_puzzle(&puzzle));
/// let result = astar.search(&puzzle).unwrap();
/// assert!(result.success());
/// ```
#[derive(Debug, Clone)]
pub struct AStarSearch<H> {
    heuristic: H,
    weight: f64,
}

impl<H> AStarSearch<H> {
    /// Creates an unweighted A* search (`weight = 1.0`).
    pub fn new(heuristic: H) -> Self {
        Self::with_weight(heuristic, 1.0)
    }

    /// Creates a weighted A* search; `weight` multiplies the heuristic
    /// term and must be non-negative.
    pub fn with_weight(heuristic: H, weight: f64) -> Self {
        Self { heuristic, weight }
    }
}

impl<P, H> SearchAlgorithm<P> for AStarSearch<H>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    fn search(&mut self, problem: &P) -> Result<SearchResult<P::State, P::Action>> {
        let start = Instant::now();
        let root = Rc::new(Node::root(problem.initial_state()));

        let weight = self.weight;
        let heuristic = &self.heuristic;
        let f = |node: &Node<P::State, P::Action>| {
            node.path_cost() + weight * heuristic.evaluate(node.state())
        };

        let mut frontier = Frontier::new();
        frontier.push(f(&root), Rc::clone(&root));

        let mut best_g: HashMap<P::Key, f64> = HashMap::new();
        let mut nodes_expanded = 0u64;

        while let Some(node) = frontier.pop() {
            if problem.is_goal(node.state()) {
                return Ok(SearchResult::solved(node, nodes_expanded, start.elapsed()));
            }

            let key = problem.state_key(node.state());
            if best_g.get(&key).is_some_and(|&g| g <= node.path_cost()) {
                // Lazy deletion: a cheaper route to this key was already
                // expanded.
                continue;
            }
            best_g.insert(key, node.path_cost());
            nodes_expanded += 1;

            for child in node.expand(problem)? {
                let child_key = problem.state_key(child.state());
                if best_g
                    .get(&child_key)
                    .is_none_or(|&g| child.path_cost() < g)
                {
                    let priority = f(&child);
                    frontier.push(priority, child);
                }
            }
        }

        debug!(nodes_expanded, "frontier exhausted without reaching a goal");
        Ok(SearchResult::failed(nodes_expanded, start.elapsed()))
    }

    fn name(&self) -> &'static str {
        "AStar"
    }
}
