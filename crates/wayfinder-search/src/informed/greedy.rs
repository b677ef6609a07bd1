//! Greedy best-first search.

use std::collections::HashSet;
use std::rc::Rc;
use std::time::Instant;

use wayfinder_core::{Heuristic, Node, Problem, Result, SearchAlgorithm, SearchResult};

use crate::frontier::Frontier;

/// Best-first search ordered purely by `h(state)`.
///
/// Once a state key has been popped it is marked visited and never
/// re-expanded, even if a cheaper path to it is discovered later. The
/// goal test happens at pop time, after the visited check, so a goal
/// reached via a worse path than an earlier visit is never re-reported.
/// Fast and memory-light, but not cost-optimal.
#[derive(Debug, Clone)]
pub struct GreedyBestFirstSearch<H> {
    heuristic: H,
}

impl<H> GreedyBestFirstSearch<H> {
    /// Creates a greedy best-first search guided by `heuristic`.
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<P, H> SearchAlgorithm<P> for GreedyBestFirstSearch<H>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    fn search(&mut self, problem: &P) -> Result<SearchResult<P::State, P::Action>> {
        let start = Instant::now();
        let root = Rc::new(Node::root(problem.initial_state()));

        let mut frontier = Frontier::new();
        frontier.push(self.heuristic.evaluate(root.state()), Rc::clone(&root));

        let mut visited: HashSet<P::Key> = HashSet::new();
        let mut nodes_expanded = 0u64;

        while let Some(node) = frontier.pop() {
            if !visited.insert(problem.state_key(node.state())) {
                continue;
            }

            if problem.is_goal(node.state()) {
                return Ok(SearchResult::solved(node, nodes_expanded, start.elapsed()));
            }
            nodes_expanded += 1;

            for child in node.expand(problem)? {
                if !visited.contains(&problem.state_key(child.state())) {
                    let priority = self.heuristic.evaluate(child.state());
                    frontier.push(priority, child);
                }
            }
        }

        Ok(SearchResult::failed(nodes_expanded, start.elapsed()))
    }

    fn name(&self) -> &'static str {
        "GreedyBestFirst"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_puzzle::{ManhattanDistance, SlidingPuzzle};

    #[test]
    fn initial_goal_returns_without_expansion() {
        let puzzle = SlidingPuzzle::solved(3);
        let mut greedy = GreedyBestFirstSearch::new(ManhattanDistance::for_puzzle(&puzzle));
        let result = greedy.search(&puzzle).unwrap();

        assert!(result.success());
        assert_eq!(result.nodes_expanded(), 0);
        assert_eq!(result.solution_path().len(), 1);
    }

    #[test]
    fn reaches_goal_without_cost_guarantee() {
        let puzzle = SlidingPuzzle::scrambled(3, 12, 21);
        let mut greedy = GreedyBestFirstSearch::new(ManhattanDistance::for_puzzle(&puzzle));
        let result = greedy.search(&puzzle).unwrap();

        assert!(result.success());
        assert!(result.solution_cost().is_finite());
    }

    #[test]
    fn never_revisits_a_popped_key() {
        let puzzle = SlidingPuzzle::scrambled(3, 10, 2);
        let mut greedy = GreedyBestFirstSearch::new(ManhattanDistance::for_puzzle(&puzzle));
        let result = greedy.search(&puzzle).unwrap();

        // A solution path re-entering an expanded key would have been
        // dropped at pop time, so states along it are pairwise distinct.
        let path = result.solution_path();
        for (i, a) in path.iter().enumerate() {
            for b in path.iter().skip(i + 1) {
                assert_ne!(a.state(), b.state());
            }
        }
    }
}
