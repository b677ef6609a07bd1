//! Experiment result types.

use std::time::Duration;

use serde::Serialize;

/// Outcome of a single algorithm run on one scrambled instance.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentRun {
    /// Catalog name of the algorithm.
    pub algorithm: String,
    /// Board side length.
    pub size: usize,
    /// Scramble moves applied to the instance.
    pub scramble_depth: usize,
    /// Seed the instance was scrambled with.
    pub seed: u64,
    /// Whether a goal was reached.
    pub success: bool,
    /// Solution path cost, `+inf` when unsolved.
    pub solution_cost: f64,
    /// Nodes expanded during the search.
    pub nodes_expanded: u64,
    /// Wall-clock runtime.
    pub runtime: Duration,
    /// Outer-loop iterations for iterative algorithms.
    pub iterations: u64,
}

/// Aggregated outcomes of one experiment batch.
#[derive(Debug, Clone, Default)]
pub struct ExperimentResult {
    /// Batch name.
    pub name: String,
    /// Individual runs, in execution order.
    pub runs: Vec<ExperimentRun>,
}

impl ExperimentResult {
    /// Creates an empty result for the named batch.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runs: Vec::new(),
        }
    }

    /// Appends a run.
    pub fn add_run(&mut self, run: ExperimentRun) {
        self.runs.push(run);
    }

    /// Returns the number of recorded runs.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Returns the distinct algorithm names, in first-seen order.
    pub fn algorithms(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for run in &self.runs {
            if !names.contains(&run.algorithm.as_str()) {
                names.push(&run.algorithm);
            }
        }
        names
    }

    /// Returns the runs recorded for `algorithm`.
    pub fn runs_for<'a>(&'a self, algorithm: &'a str) -> impl Iterator<Item = &'a ExperimentRun> {
        self.runs.iter().filter(move |run| run.algorithm == algorithm)
    }

    /// Returns the fraction of solved runs for `algorithm`.
    pub fn success_rate(&self, algorithm: &str) -> f64 {
        let (solved, total) = self
            .runs_for(algorithm)
            .fold((0usize, 0usize), |(solved, total), run| {
                (solved + usize::from(run.success), total + 1)
            });
        if total == 0 {
            0.0
        } else {
            solved as f64 / total as f64
        }
    }

    /// Returns the mean solution cost over the solved runs of
    /// `algorithm`, or `None` if nothing was solved.
    pub fn avg_solution_cost(&self, algorithm: &str) -> Option<f64> {
        let costs: Vec<f64> = self
            .runs_for(algorithm)
            .filter(|run| run.success)
            .map(|run| run.solution_cost)
            .collect();
        if costs.is_empty() {
            None
        } else {
            Some(costs.iter().sum::<f64>() / costs.len() as f64)
        }
    }

    /// Returns the mean nodes expanded over all runs of `algorithm`.
    pub fn avg_nodes_expanded(&self, algorithm: &str) -> f64 {
        let (sum, total) = self
            .runs_for(algorithm)
            .fold((0u64, 0usize), |(sum, total), run| {
                (sum + run.nodes_expanded, total + 1)
            });
        if total == 0 {
            0.0
        } else {
            sum as f64 / total as f64
        }
    }

    /// Returns the mean runtime over all runs of `algorithm`.
    pub fn avg_runtime(&self, algorithm: &str) -> Duration {
        let mut total = Duration::ZERO;
        let mut count = 0u32;
        for run in self.runs_for(algorithm) {
            total += run.runtime;
            count += 1;
        }
        if count == 0 {
            Duration::ZERO
        } else {
            total / count
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(algorithm: &str, success: bool, cost: f64, expanded: u64) -> ExperimentRun {
        ExperimentRun {
            algorithm: algorithm.to_string(),
            size: 3,
            scramble_depth: 20,
            seed: 0,
            success,
            solution_cost: cost,
            nodes_expanded: expanded,
            runtime: Duration::from_millis(10),
            iterations: 0,
        }
    }

    #[test]
    fn aggregates_per_algorithm() {
        let mut result = ExperimentResult::new("test");
        result.add_run(run("astar", true, 10.0, 100));
        result.add_run(run("astar", true, 14.0, 300));
        result.add_run(run("greedy", false, f64::INFINITY, 50));

        assert_eq!(result.run_count(), 3);
        assert_eq!(result.algorithms(), vec!["astar", "greedy"]);
        assert_eq!(result.success_rate("astar"), 1.0);
        assert_eq!(result.success_rate("greedy"), 0.0);
        assert_eq!(result.avg_solution_cost("astar"), Some(12.0));
        assert_eq!(result.avg_solution_cost("greedy"), None);
        assert_eq!(result.avg_nodes_expanded("astar"), 200.0);
    }

    #[test]
    fn empty_batch_aggregates_to_zero() {
        let result = ExperimentResult::new("empty");
        assert_eq!(result.success_rate("astar"), 0.0);
        assert_eq!(result.avg_nodes_expanded("astar"), 0.0);
        assert_eq!(result.avg_runtime("astar"), Duration::ZERO);
    }
}
