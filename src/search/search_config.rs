use crate::search::{search_engines::SearchEngineName, ConfigError, SearchError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which engine to run and with which parameters, as read from a TOML file,
/// e.g.
///
/// ```toml
/// engine = "iterative-deepening"
/// initial-bound = 2
/// final-bound = 12
/// verbose = true
/// ```
///
/// Bounds are kept signed so that negative values are reported as errors
/// when the engine is built rather than rejected by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SearchConfig {
    pub engine: SearchEngineName,
    pub verbose: bool,
    /// Bound of the depth-limited engine
    pub bound: Option<i64>,
    /// First bound tried by iterative deepening
    pub initial_bound: i64,
    /// Iterative deepening stops before reaching this bound
    pub final_bound: Option<i64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine: SearchEngineName::default(),
            verbose: false,
            bound: None,
            initial_bound: 0,
            final_bound: None,
        }
    }
}

fn non_negative(bound: i64) -> Result<usize, SearchError> {
    usize::try_from(bound).map_err(|_| SearchError::NegativeBound(bound))
}

impl SearchConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        Self::from_text(&std::fs::read_to_string(path)?)
    }

    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// The bound of the depth-limited engine.
    pub fn depth_bound(&self) -> Result<usize, SearchError> {
        let bound = self
            .bound
            .ok_or(SearchError::MissingBound(SearchEngineName::DepthLimited))?;
        non_negative(bound)
    }

    /// The `(initial, final)` bounds of iterative deepening.
    pub fn deepening_bounds(&self) -> Result<(usize, usize), SearchError> {
        let final_bound = self
            .final_bound
            .ok_or(SearchError::MissingBound(
                SearchEngineName::IterativeDeepening,
            ))?;
        let initial_bound = non_negative(self.initial_bound)?;
        Ok((initial_bound, non_negative(final_bound)?))
    }
}
