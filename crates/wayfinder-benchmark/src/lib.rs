//! Wayfinder Benchmark
//!
//! Batch-experiment orchestration over the sliding-tile puzzle domain:
//! - TOML-backed experiment configuration
//! - A named catalog of ready-made algorithm setups
//! - A runner that scrambles instances, solves them and records outcomes
//! - CSV and Markdown reporting

pub mod catalog;
pub mod config;
pub mod report;
pub mod result;
pub mod runner;

pub use catalog::build_algorithm;
pub use config::{ConfigError, ExperimentConfig};
pub use report::{CsvExporter, MarkdownReport};
pub use result::{ExperimentResult, ExperimentRun};
pub use runner::ExperimentRunner;
