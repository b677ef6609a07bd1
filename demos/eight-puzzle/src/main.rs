//! Eight-Puzzle Example
//!
//! Scrambles a 3x3 sliding puzzle and solves it with every search
//! strategy in the framework, then runs a small experiment batch and
//! prints the summary report.

use tracing_subscriber::EnvFilter;

use wayfinder::benchmark::{build_algorithm, ExperimentConfig, ExperimentRunner, MarkdownReport};
use wayfinder::prelude::*;

fn solve_with(name: &str, puzzle: &SlidingPuzzle) {
    let algorithm = match build_algorithm(name, puzzle) {
        Ok(algorithm) => algorithm,
        Err(err) => {
            eprintln!("cannot build {name}: {err}");
            return;
        }
    };

    let mut agent = SearchAgent::new(puzzle.clone(), algorithm);
    match agent.solve() {
        Ok(result) if result.success() => {
            println!(
                "{name:<24} solved  cost {:>4}  expanded {:>7}  in {:.2?}",
                result.solution_cost(),
                result.nodes_expanded(),
                result.runtime(),
            );
        }
        Ok(result) => {
            println!(
                "{name:<24} failed          expanded {:>7}  in {:.2?}",
                result.nodes_expanded(),
                result.runtime(),
            );
        }
        Err(err) => eprintln!("{name} errored: {err}"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Wayfinder Eight-Puzzle Example");
    println!("==============================\n");

    let puzzle = SlidingPuzzle::scrambled(3, 20, 7);
    println!("Scrambled board (20 random moves, seed 7):");
    println!("{}\n", puzzle.display_state(&puzzle.initial_state()));

    for name in [
        "astar_manhattan",
        "astar_linear",
        "astar_weighted",
        "idastar_manhattan",
        "greedy_manhattan",
        "hill_climbing_manhattan",
        "sa_manhattan",
        "genetic_manhattan",
    ] {
        solve_with(name, &puzzle);
    }

    // Replay the optimal plan to show the solved board.
    let mut astar = AStarSearch::new(ManhattanDistance::for_puzzle(&puzzle));
    if let Ok(result) = astar.search(&puzzle) {
        let actions = result.solution_actions();
        let plan: Vec<String> = actions.iter().map(ToString::to_string).collect();
        println!("\nOptimal plan: {}", plan.join(" "));

        let mut state = puzzle.initial_state();
        for action in &actions {
            match puzzle.result(&state, action) {
                Ok(next) => state = next,
                Err(err) => {
                    eprintln!("plan replay failed: {err}");
                    return;
                }
            }
        }
        println!("\nBoard after replaying the plan:");
        println!("{}", puzzle.display_state(&state));
    }

    println!("\n--- Running a small experiment batch ---\n");

    let config = ExperimentConfig {
        name: "demo-3x3".to_string(),
        size: 3,
        scramble_depth: 12,
        runs: 5,
        algorithms: vec![
            "astar_manhattan".to_string(),
            "idastar_manhattan".to_string(),
            "greedy_manhattan".to_string(),
            "hill_climbing_manhattan".to_string(),
        ],
        csv_output: None,
        markdown_output: None,
    };

    match ExperimentRunner::new(config).run() {
        Ok(result) => println!("{}", MarkdownReport::to_string(&result)),
        Err(err) => eprintln!("experiment batch failed: {err}"),
    }
}
