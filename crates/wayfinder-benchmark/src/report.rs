//! Report generation for experiment results.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::result::ExperimentResult;

/// CSV exporter for experiment results.
///
/// One row per run, with the columns the analysis scripts expect.
///
/// # Example
///
/// ```
/// use wayfinder_benchmark::{CsvExporter, ExperimentResult};
///
/// let result = ExperimentResult::new("empty");
/// let csv = CsvExporter::to_string(&result);
/// assert!(csv.starts_with("algorithm,size,scramble_depth"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports an experiment result to a CSV string.
    pub fn to_string(result: &ExperimentResult) -> String {
        let mut output = String::new();

        writeln!(
            output,
            "algorithm,size,scramble_depth,seed,success,solution_cost,nodes_expanded,runtime_ms,iterations"
        )
        .unwrap();

        for run in &result.runs {
            writeln!(
                output,
                "{},{},{},{},{},{},{},{:.3},{}",
                run.algorithm,
                run.size,
                run.scramble_depth,
                run.seed,
                u8::from(run.success),
                run.solution_cost,
                run.nodes_expanded,
                run.runtime.as_secs_f64() * 1000.0,
                run.iterations,
            )
            .unwrap();
        }

        output
    }

    /// Exports an experiment result to a CSV file.
    pub fn to_file(result: &ExperimentResult, path: impl AsRef<Path>) -> io::Result<()> {
        let csv = Self::to_string(result);
        fs::write(path, csv)
    }

    /// Writes an experiment result as CSV to a writer.
    pub fn write<W: Write>(result: &ExperimentResult, mut writer: W) -> io::Result<()> {
        let csv = Self::to_string(result);
        writer.write_all(csv.as_bytes())
    }
}

/// Markdown report generator.
///
/// Produces a per-algorithm summary table for human consumption.
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(result: &ExperimentResult) -> String {
        let mut output = String::new();

        writeln!(output, "# Experiment: {}", result.name).unwrap();
        writeln!(output).unwrap();
        writeln!(output, "- **Runs**: {}", result.run_count()).unwrap();
        writeln!(output).unwrap();

        if result.runs.is_empty() {
            writeln!(output, "*No runs recorded.*").unwrap();
            return output;
        }

        writeln!(output, "## Summary").unwrap();
        writeln!(output).unwrap();
        writeln!(
            output,
            "| Algorithm | Solved | Avg Cost | Avg Expanded | Avg Time (ms) |"
        )
        .unwrap();
        writeln!(
            output,
            "|-----------|--------|----------|--------------|---------------|"
        )
        .unwrap();

        for algorithm in result.algorithms() {
            let avg_cost = result
                .avg_solution_cost(algorithm)
                .map_or_else(|| "-".to_string(), |cost| format!("{cost:.1}"));
            writeln!(
                output,
                "| {} | {:.0}% | {} | {:.0} | {:.2} |",
                algorithm,
                result.success_rate(algorithm) * 100.0,
                avg_cost,
                result.avg_nodes_expanded(algorithm),
                result.avg_runtime(algorithm).as_secs_f64() * 1000.0,
            )
            .unwrap();
        }

        output
    }

    /// Writes a Markdown report to a file.
    pub fn to_file(result: &ExperimentResult, path: impl AsRef<Path>) -> io::Result<()> {
        let md = Self::to_string(result);
        fs::write(path, md)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ExperimentRun;
    use std::time::Duration;

    fn sample() -> ExperimentResult {
        let mut result = ExperimentResult::new("sample");
        result.add_run(ExperimentRun {
            algorithm: "astar_manhattan".to_string(),
            size: 3,
            scramble_depth: 20,
            seed: 0,
            success: true,
            solution_cost: 14.0,
            nodes_expanded: 320,
            runtime: Duration::from_millis(4),
            iterations: 0,
        });
        result.add_run(ExperimentRun {
            algorithm: "hill_climbing_manhattan".to_string(),
            size: 3,
            scramble_depth: 20,
            seed: 0,
            success: false,
            solution_cost: f64::INFINITY,
            nodes_expanded: 18,
            runtime: Duration::from_millis(1),
            iterations: 6,
        });
        result
    }

    #[test]
    fn csv_has_header_and_one_row_per_run() {
        let csv = CsvExporter::to_string(&sample());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("solution_cost"));
        assert!(lines[1].starts_with("astar_manhattan,3,20,0,1,14,"));
        assert!(lines[2].contains(",0,inf,"));
    }

    #[test]
    fn markdown_summarizes_each_algorithm() {
        let md = MarkdownReport::to_string(&sample());
        assert!(md.contains("# Experiment: sample"));
        assert!(md.contains("| astar_manhattan | 100% | 14.0 |"));
        assert!(md.contains("| hill_climbing_manhattan | 0% | - |"));
    }
}
