//! Concrete problems the `solver` binary can load from a TOML file.

mod graph;
mod sliding_puzzle;

pub use graph::{GraphDefinition, GraphMove, GraphProblem};
pub use sliding_puzzle::{Board, ManhattanDistance, PuzzleDefinition, SlideMove, SlidingPuzzle};

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("failed to read problem file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse problem file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown node {0:?}")]
    UnknownNode(String),
    #[error("edge {from:?} -> {to:?} has negative cost {cost}")]
    NegativeCost { from: String, to: String, cost: f64 },
    #[error("invalid puzzle: {0}")]
    InvalidPuzzle(String),
}

/// A problem file, tagged by its `kind` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ProblemDefinition {
    Graph(GraphDefinition),
    SlidingPuzzle(PuzzleDefinition),
}

impl ProblemDefinition {
    pub fn from_path(path: &Path) -> Result<Self, ProblemError> {
        Self::from_text(&std::fs::read_to_string(path)?)
    }

    pub fn from_text(text: &str) -> Result<Self, ProblemError> {
        Ok(toml::from_str(text)?)
    }
}
