//! Experiment configuration.
//!
//! Load experiment batches from TOML files to control instance
//! generation, run counts and output paths without code changes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Configuration for one experiment batch.
///
/// Every field has a default, so an empty TOML document is a valid
/// configuration.
///
/// # Example
///
/// ```
/// use wayfinder_benchmark::ExperimentConfig;
///
/// let config = ExperimentConfig::from_toml_str(r#"
///     name = "shallow-3x3"
///     size = 3
///     scramble_depth = 10
///     runs = 5
///     algorithms = ["astar_manhattan", "greedy_manhattan"]
/// "#).unwrap();
///
/// assert_eq!(config.runs, 5);
/// assert_eq!(config.algorithms.len(), 2);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ExperimentConfig {
    /// Batch name used in reports.
    #[serde(default = "default_name")]
    pub name: String,

    /// Board side length.
    #[serde(default = "default_size")]
    pub size: usize,

    /// Scramble moves applied when generating each instance.
    #[serde(default = "default_scramble_depth")]
    pub scramble_depth: usize,

    /// Runs per algorithm; run index doubles as the scramble seed.
    #[serde(default = "default_runs")]
    pub runs: u64,

    /// Catalog names of the algorithms to run.
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<String>,

    /// Optional CSV output path.
    #[serde(default)]
    pub csv_output: Option<PathBuf>,

    /// Optional Markdown report output path.
    #[serde(default)]
    pub markdown_output: Option<PathBuf>,
}

fn default_name() -> String {
    "puzzle-experiments".to_string()
}

fn default_size() -> usize {
    3
}

fn default_scramble_depth() -> usize {
    20
}

fn default_runs() -> u64 {
    20
}

fn default_algorithms() -> Vec<String> {
    [
        "astar_misplaced",
        "astar_manhattan",
        "astar_linear",
        "idastar_manhattan",
        "idastar_linear",
        "greedy_manhattan",
        "hill_climbing_manhattan",
        "sa_manhattan",
        "genetic_manhattan",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            size: default_size(),
            scramble_depth: default_scramble_depth(),
            runs: default_runs(),
            algorithms: default_algorithms(),
            csv_output: None,
            markdown_output: None,
        }
    }
}

impl ExperimentConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid TOML.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ExperimentConfig::from_toml_str("").unwrap();
        assert_eq!(config.size, 3);
        assert_eq!(config.scramble_depth, 20);
        assert_eq!(config.runs, 20);
        assert_eq!(config.algorithms.len(), 9);
        assert!(config.csv_output.is_none());
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let config = ExperimentConfig::from_toml_str(
            r#"
            name = "deep-4x4"
            size = 4
            scramble_depth = 40
            runs = 10
            algorithms = ["astar_manhattan"]
            csv_output = "results/deep.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.name, "deep-4x4");
        assert_eq!(config.size, 4);
        assert_eq!(config.scramble_depth, 40);
        assert_eq!(config.algorithms, vec!["astar_manhattan".to_string()]);
        assert_eq!(
            config.csv_output.as_deref(),
            Some(std::path::Path::new("results/deep.csv"))
        );
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = ExperimentConfig::from_toml_str("runs = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
