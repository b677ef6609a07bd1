//! Iterative-deepening A*.

use std::rc::Rc;
use std::time::Instant;

use tracing::trace;

use wayfinder_core::{Heuristic, Node, Problem, Result, SearchAlgorithm, SearchResult};

/// Outcome of one depth-first probe under a cost bound.
enum Probe<S, A> {
    /// A goal node was reached; propagate it without exploring siblings.
    Found(Rc<Node<S, A>>),
    /// Minimum `f` among pruned branches, the candidate for the next
    /// bound. Infinite when the subtree generated no child at all.
    Min(f64),
}

/// Iterative deepening over an `f = g + h` cost bound.
///
/// Each pass is a depth-first expansion that prunes any branch whose `f`
/// exceeds the current bound, returning that `f` as a candidate for the
/// next bound. The only duplicate detection is single-move cycle
/// avoidance: a child equal to its grandparent's state is skipped. Memory
/// stays linear in the solution depth, at the price of re-expanding
/// shallow nodes on every pass.
#[derive(Debug, Clone)]
pub struct IdaStarSearch<H> {
    heuristic: H,
}

impl<H> IdaStarSearch<H> {
    /// Creates an IDA* search guided by `heuristic`.
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }

    fn probe<P>(
        &self,
        problem: &P,
        node: &Rc<Node<P::State, P::Action>>,
        g: f64,
        bound: f64,
        nodes_expanded: &mut u64,
    ) -> Result<Probe<P::State, P::Action>>
    where
        P: Problem,
        H: Heuristic<P::State>,
    {
        let f = g + self.heuristic.evaluate(node.state());
        if f > bound {
            return Ok(Probe::Min(f));
        }
        if problem.is_goal(node.state()) {
            return Ok(Probe::Found(Rc::clone(node)));
        }

        let mut min = f64::INFINITY;
        *nodes_expanded += 1;

        for action in problem.actions(node.state()) {
            let next_state = problem.result(node.state(), &action)?;

            // Do not undo the move that produced this node.
            if node
                .parent()
                .is_some_and(|parent| *parent.state() == next_state)
            {
                continue;
            }

            let cost = problem.step_cost(node.state(), &action, &next_state);
            let child = Rc::new(Node::child(Rc::clone(node), action, next_state, cost));

            match self.probe(problem, &child, g + cost, bound, nodes_expanded)? {
                Probe::Found(solution) => return Ok(Probe::Found(solution)),
                Probe::Min(candidate) => {
                    if candidate < min {
                        min = candidate;
                    }
                }
            }
        }

        Ok(Probe::Min(min))
    }
}

impl<P, H> SearchAlgorithm<P> for IdaStarSearch<H>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    fn search(&mut self, problem: &P) -> Result<SearchResult<P::State, P::Action>> {
        let start = Instant::now();
        let root = Rc::new(Node::root(problem.initial_state()));
        let mut bound = self.heuristic.evaluate(root.state());
        let mut nodes_expanded = 0u64;

        loop {
            match self.probe(problem, &root, 0.0, bound, &mut nodes_expanded)? {
                Probe::Found(solution) => {
                    return Ok(SearchResult::solved(solution, nodes_expanded, start.elapsed()));
                }
                Probe::Min(candidate) if candidate.is_infinite() => {
                    // Dead end with no further bound to try.
                    return Ok(SearchResult::failed(nodes_expanded, start.elapsed()));
                }
                Probe::Min(candidate) => {
                    trace!(bound = candidate, "deepening cost bound");
                    bound = candidate;
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "IdaStar"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_puzzle::{ManhattanDistance, SlidingPuzzle};

    #[test]
    fn initial_goal_returns_without_expansion() {
        let puzzle = SlidingPuzzle::solved(3);
        let mut ida = IdaStarSearch::new(ManhattanDistance::for_puzzle(&puzzle));
        let result = ida.search(&puzzle).unwrap();

        assert!(result.success());
        assert_eq!(result.nodes_expanded(), 0);
        assert_eq!(result.solution_path().len(), 1);
    }

    #[test]
    fn finds_optimal_cost_on_shallow_scramble() {
        let puzzle = SlidingPuzzle::scrambled(3, 6, 17);
        let mut ida = IdaStarSearch::new(ManhattanDistance::for_puzzle(&puzzle));
        let result = ida.search(&puzzle).unwrap();

        assert!(result.success());
        assert!(result.solution_cost() <= 6.0);
    }

    #[test]
    fn solution_path_never_undoes_the_previous_move() {
        let puzzle = SlidingPuzzle::scrambled(3, 14, 29);
        let mut ida = IdaStarSearch::new(ManhattanDistance::for_puzzle(&puzzle));
        let result = ida.search(&puzzle).unwrap();

        let path = result.solution_path();
        for window in path.windows(3) {
            assert_ne!(window[0].state(), window[2].state());
        }
    }
}
