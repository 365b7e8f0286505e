mod error;
mod explored_set;
mod frontiers;
mod heuristics;
mod plan;
mod problem;
mod search_config;
mod search_node;
mod search_space;
pub mod search_engines;
mod validate;
mod verbosity;

pub use error::{ConfigError, SearchError};
pub use explored_set::{ExploredPolicy, ExploredSet};
pub use frontiers::{Frontier, NodeQueue, NodeStack, PriorityFrontier, StateIndex};
pub use heuristics::{Heuristic, HeuristicValue, ZeroHeuristic};
pub use plan::Plan;
pub use problem::{Action, Problem};
pub use search_config::SearchConfig;
pub use search_node::{NodeFactory, NodeId, NodeKey, NodeMetadata, ScoringFunction, SearchNode};
pub use search_space::{SearchSpace, StateId};
pub use validate::{plan_cost, validate};
pub use verbosity::Verbosity;
