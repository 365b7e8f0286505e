use crate::search::{
    search_engines::{
        AStarSearch, BreadthFirstSearch, DepthFirstSearch, DepthLimitedSearch,
        GreedyBestFirstSearch, IterativeDeepeningSearch, SearchStatistics, UniformCostSearch,
    },
    Heuristic, Plan, Problem, SearchConfig, SearchError, SearchNode,
};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIs, EnumIter};

#[derive(Debug, Clone, PartialEq, Eq, EnumIs)]
pub enum SearchResult {
    /// A goal was reached by the plan
    Success(Plan),
    /// The frontier ran out before a goal was reached. For the bounded
    /// engines this does not mean that the problem has no solution.
    NoSolution,
}

impl SearchResult {
    pub fn into_plan(self) -> Option<Plan> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            SearchResult::NoSolution => None,
        }
    }
}

pub trait SearchEngine<P: Problem> {
    /// Search for a plan of `problem`. Every call starts from scratch, so the
    /// same engine can be used for several problems one after the other.
    fn search(&mut self, problem: &P) -> (SearchResult, SearchStatistics);
}

#[derive(
    clap::ValueEnum,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchEngineName {
    #[default]
    #[clap(help = "Breadth-first search, returns a plan with the fewest actions.")]
    BreadthFirst,
    #[clap(help = "Depth-first search, only remembers the current branch.")]
    DepthFirst,
    #[clap(help = "Depth-first search that does not expand nodes at the bound.")]
    DepthLimited,
    #[clap(help = "Depth-limited search with increasing bounds.")]
    IterativeDeepening,
    #[clap(help = "Greedy best-first search ordered by the heuristic.")]
    GreedyBestFirst,
    #[clap(help = "Uniform-cost search, returns a cheapest plan.")]
    UniformCost,
    #[clap(name = "astar", help = "A* search, requires a heuristic.")]
    #[serde(rename = "astar")]
    #[strum(serialize = "astar")]
    AStar,
}

impl SearchEngineName {
    pub fn requires_heuristic(&self) -> bool {
        matches!(
            self,
            SearchEngineName::GreedyBestFirst | SearchEngineName::AStar
        )
    }

    /// Build the engine described by `config`. Greedy best-first search
    /// scores nodes by the heuristic value of their state.
    pub fn create<P>(
        &self,
        config: &SearchConfig,
        heuristic: Option<Box<dyn Heuristic<P::State>>>,
    ) -> Result<Box<dyn SearchEngine<P>>, SearchError>
    where
        P: Problem + 'static,
        P::State: 'static,
        P::Action: 'static,
    {
        let verbose = config.verbose;
        let engine: Box<dyn SearchEngine<P>> = match self {
            SearchEngineName::BreadthFirst => Box::new(BreadthFirstSearch::new(verbose)),
            SearchEngineName::DepthFirst => Box::new(DepthFirstSearch::new(verbose)),
            SearchEngineName::DepthLimited => {
                Box::new(DepthLimitedSearch::new(config.depth_bound()?, verbose))
            }
            SearchEngineName::IterativeDeepening => {
                let (initial_bound, final_bound) = config.deepening_bounds()?;
                Box::new(IterativeDeepeningSearch::new(
                    initial_bound,
                    final_bound,
                    verbose,
                )?)
            }
            SearchEngineName::GreedyBestFirst => {
                let heuristic = heuristic.ok_or(SearchError::MissingHeuristic(*self))?;
                Box::new(GreedyBestFirstSearch::new(
                    move |node: &SearchNode<P::State, P::Action>| {
                        heuristic.evaluate(node.get_state()).into_inner()
                    },
                    verbose,
                ))
            }
            SearchEngineName::UniformCost => Box::new(UniformCostSearch::new(verbose)),
            SearchEngineName::AStar => {
                let heuristic = heuristic.ok_or(SearchError::MissingHeuristic(*self))?;
                Box::new(AStarSearch::new(
                    move |state: &P::State| heuristic.evaluate(state).into_inner(),
                    verbose,
                ))
            }
        };
        Ok(engine)
    }
}
