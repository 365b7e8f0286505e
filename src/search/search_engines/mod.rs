mod best_first;
mod breadth_first;
mod depth_first;
mod general_search;
mod iterative_deepening;
mod search_engine;
mod search_statistics;

pub use best_first::{AStarSearch, GreedyBestFirstSearch, UniformCostSearch};
pub use breadth_first::BreadthFirstSearch;
pub use depth_first::{DepthFirstSearch, DepthLimitedSearch};
pub use general_search::{Expandability, GeneralSearch};
pub use iterative_deepening::IterativeDeepeningSearch;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use search_statistics::SearchStatistics;
