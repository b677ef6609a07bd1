//! Steepest-descent hill climbing.

use std::rc::Rc;
use std::time::Instant;

use wayfinder_core::{Heuristic, Node, Problem, Result, SearchAlgorithm, SearchResult};

/// Steepest-descent hill climbing on the heuristic value.
///
/// Each iteration materializes every neighbor, moves to the one with the
/// smallest heuristic value, and stops as soon as the best neighbor is no
/// longer a strict improvement (local optimum) or the step budget runs
/// out. Ties between equally good neighbors resolve to the first in the
/// problem's action order.
#[derive(Debug, Clone)]
pub struct HillClimbingSearch<H> {
    heuristic: H,
    max_steps: u64,
}

impl<H> HillClimbingSearch<H> {
    /// Creates a hill climbing search with the given step budget.
    pub fn new(heuristic: H, max_steps: u64) -> Self {
        Self {
            heuristic,
            max_steps,
        }
    }
}

impl<P, H> SearchAlgorithm<P> for HillClimbingSearch<H>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    fn search(&mut self, problem: &P) -> Result<SearchResult<P::State, P::Action>> {
        let start = Instant::now();
        let mut current = Rc::new(Node::root(problem.initial_state()));
        let mut current_h = self.heuristic.evaluate(current.state());

        let mut nodes_expanded = 0u64;
        let mut iterations = 0u64;

        for _ in 0..self.max_steps {
            iterations += 1;

            if problem.is_goal(current.state()) {
                return Ok(
                    SearchResult::solved(current, nodes_expanded, start.elapsed())
                        .with_iterations(iterations),
                );
            }

            let neighbors = current.expand(problem)?;
            nodes_expanded += neighbors.len() as u64;

            let mut best: Option<(f64, Rc<Node<P::State, P::Action>>)> = None;
            for neighbor in neighbors {
                let h = self.heuristic.evaluate(neighbor.state());
                if best.as_ref().is_none_or(|(best_h, _)| h < *best_h) {
                    best = Some((h, neighbor));
                }
            }

            let Some((best_h, best_neighbor)) = best else {
                break;
            };
            if best_h >= current_h {
                // Local optimum: the best neighbor is no improvement.
                break;
            }

            current = best_neighbor;
            current_h = best_h;
        }

        let success = problem.is_goal(current.state());
        let result = if success {
            SearchResult::solved(current, nodes_expanded, start.elapsed())
        } else {
            SearchResult::failed(nodes_expanded, start.elapsed())
        };
        Ok(result.with_iterations(iterations))
    }

    fn name(&self) -> &'static str {
        "HillClimbing"
    }
}
