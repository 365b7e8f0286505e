use crate::search::search_engines::SearchEngineName;
use thiserror::Error;

/// An engine could not be built from the given parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("depth bounds must be non-negative, got {0}")]
    NegativeBound(i64),
    #[error("initial bound {initial_bound} exceeds final bound {final_bound}")]
    InvalidBounds {
        initial_bound: usize,
        final_bound: usize,
    },
    #[error("the {0} engine requires a depth bound")]
    MissingBound(SearchEngineName),
    #[error("the {0} engine requires a heuristic")]
    MissingHeuristic(SearchEngineName),
}

/// A search configuration file could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read search config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse search config: {0}")]
    Parse(#[from] toml::de::Error),
}
