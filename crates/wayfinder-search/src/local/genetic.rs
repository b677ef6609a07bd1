//! Genetic search over fixed-length action sequences.

use std::cmp::Ordering;
use std::rc::Rc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::trace;

use wayfinder_core::{Heuristic, Node, Problem, Result, SearchAlgorithm, SearchResult};

/// Number of individuals sampled per tournament selection.
const TOURNAMENT_SIZE: usize = 3;

/// Genetic search evolving chromosomes of domain actions.
///
/// A chromosome is a fixed-length action sequence drawn from the
/// domain's complete action alphabet, not validated against any state at
/// construction time. Evaluation replays it from the initial state,
/// silently skipping actions illegal in the current state; reaching the
/// goal mid-replay yields infinite fitness and stops the replay,
/// otherwise fitness is `1 / (h(final) + 1)`.
///
/// Each generation keeps the single fittest individual unchanged and
/// fills the rest through tournament selection, single-point crossover
/// and point mutation. The random source is owned and seedable.
///
/// `population_size >= 1` and `chromosome_length >= 2` are caller
/// contracts.
#[derive(Debug, Clone)]
pub struct GeneticAlgorithmSearch<H, A> {
    heuristic: H,
    alphabet: Vec<A>,
    population_size: usize,
    mutation_rate: f64,
    max_generations: u64,
    chromosome_length: usize,
    rng: StdRng,
}

impl<H, A> GeneticAlgorithmSearch<H, A> {
    /// Creates a genetic search over `alphabet` with default parameters
    /// (population 50, mutation rate 0.1, 100 generations, chromosome
    /// length 30), seeded from the operating system.
    pub fn new(heuristic: H, alphabet: Vec<A>) -> Self {
        Self {
            heuristic,
            alphabet,
            population_size: 50,
            mutation_rate: 0.1,
            max_generations: 100,
            chromosome_length: 30,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Sets the population size.
    #[must_use]
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the per-individual mutation probability.
    #[must_use]
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Sets the generation budget.
    #[must_use]
    pub fn with_max_generations(mut self, max_generations: u64) -> Self {
        self.max_generations = max_generations;
        self
    }

    /// Sets the chromosome length.
    #[must_use]
    pub fn with_chromosome_length(mut self, chromosome_length: usize) -> Self {
        self.chromosome_length = chromosome_length;
        self
    }

    /// Replaces the random source with a deterministic seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Replaces the random source.
    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }
}

impl<H, A: Clone + PartialEq> GeneticAlgorithmSearch<H, A> {
    fn random_chromosome(&mut self) -> Vec<A> {
        let mut chromosome = Vec::with_capacity(self.chromosome_length);
        for _ in 0..self.chromosome_length {
            if let Some(gene) = self.alphabet.choose(&mut self.rng) {
                chromosome.push(gene.clone());
            }
        }
        chromosome
    }

    /// Samples [`TOURNAMENT_SIZE`] individuals without replacement and
    /// returns the fittest.
    fn tournament(&mut self, scored: &[(f64, Vec<A>)]) -> Vec<A> {
        let mut best: Option<&(f64, Vec<A>)> = None;
        for candidate in scored.choose_multiple(&mut self.rng, TOURNAMENT_SIZE) {
            if best.is_none_or(|b| candidate.0 > b.0) {
                best = Some(candidate);
            }
        }
        best.map(|(_, chromosome)| chromosome.clone())
            .unwrap_or_default()
    }

    /// Splices the parents at a uniformly random cut strictly inside the
    /// chromosome.
    fn crossover(&mut self, first: &[A], second: &[A]) -> Vec<A> {
        let point = self.rng.random_range(1..first.len());
        let mut child = first[..point].to_vec();
        child.extend_from_slice(&second[point..]);
        child
    }

    /// With probability `mutation_rate`, replaces one uniformly random
    /// gene with a uniformly random action.
    fn mutate(&mut self, chromosome: &mut [A]) {
        if self.rng.random::<f64>() < self.mutation_rate {
            let index = self.rng.random_range(0..chromosome.len());
            if let Some(gene) = self.alphabet.choose(&mut self.rng) {
                chromosome[index] = gene.clone();
            }
        }
    }

    /// Replays `chromosome` from the initial state, skipping illegal
    /// actions, and returns its fitness with the final node reached.
    fn replay<P>(
        &self,
        problem: &P,
        chromosome: &[A],
    ) -> Result<(f64, Rc<Node<P::State, A>>)>
    where
        P: Problem<Action = A>,
        H: Heuristic<P::State>,
    {
        let mut current = Rc::new(Node::root(problem.initial_state()));
        for action in chromosome {
            if problem.actions(current.state()).contains(action) {
                let next_state = problem.result(current.state(), action)?;
                current = Rc::new(Node::child(
                    Rc::clone(&current),
                    action.clone(),
                    next_state,
                    1.0,
                ));
                if problem.is_goal(current.state()) {
                    return Ok((f64::INFINITY, current));
                }
            }
        }
        let h = self.heuristic.evaluate(current.state());
        Ok((1.0 / (h + 1.0), current))
    }
}

impl<P, H> SearchAlgorithm<P> for GeneticAlgorithmSearch<H, P::Action>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    fn search(&mut self, problem: &P) -> Result<SearchResult<P::State, P::Action>> {
        let start = Instant::now();

        let initial = problem.initial_state();
        if problem.is_goal(&initial) {
            return Ok(SearchResult::solved(
                Rc::new(Node::root(initial)),
                0,
                start.elapsed(),
            ));
        }

        let mut population: Vec<Vec<P::Action>> = (0..self.population_size)
            .map(|_| self.random_chromosome())
            .collect();

        let mut nodes_expanded = 0u64;
        let mut last_scored: Vec<(f64, Vec<P::Action>)> = Vec::new();

        for generation in 0..self.max_generations {
            let mut scored = Vec::with_capacity(population.len());
            for chromosome in &population {
                let (fitness, final_node) = self.replay(problem, chromosome)?;
                // Replay cost approximation, not an exact expansion count.
                nodes_expanded += self.chromosome_length as u64;

                if fitness.is_infinite() {
                    return Ok(SearchResult::solved(
                        final_node,
                        nodes_expanded,
                        start.elapsed(),
                    )
                    .with_iterations(generation));
                }
                scored.push((fitness, chromosome.clone()));
            }

            scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
            if let Some((best_fitness, _)) = scored.first() {
                trace!(generation, best_fitness, "generation evaluated");
            }

            let mut next_population = Vec::with_capacity(self.population_size);
            if let Some((_, elite)) = scored.first() {
                next_population.push(elite.clone());
            }
            while next_population.len() < self.population_size {
                let first = self.tournament(&scored);
                let second = self.tournament(&scored);
                let mut child = self.crossover(&first, &second);
                self.mutate(&mut child);
                next_population.push(child);
            }

            last_scored = scored;
            population = next_population;
        }

        // Budget exhausted: the fittest individual of the last evaluated
        // generation gets one final replay.
        let Some((_, best)) = last_scored.first() else {
            return Ok(SearchResult::failed(nodes_expanded, start.elapsed())
                .with_iterations(self.max_generations));
        };
        let (_, best_node) = self.replay(problem, best)?;

        let result = if problem.is_goal(best_node.state()) {
            SearchResult::solved(best_node, nodes_expanded, start.elapsed())
        } else {
            SearchResult::failed(nodes_expanded, start.elapsed())
        };
        Ok(result.with_iterations(self.max_generations))
    }

    fn name(&self) -> &'static str {
        "GeneticAlgorithm"
    }
}
