//! Best-first search engines. All of them keep the frontier ordered by a node
//! score and differ only in how the score is computed.
//!
//! A node is considered a duplicate only when a node with the same state and
//! a score no worse than its own is queued or explored. Finding a cheaper path
//! to a known state therefore queues the state again.

use crate::search::{
    search_engines::{Expandability, GeneralSearch, SearchEngine, SearchResult, SearchStatistics},
    ExploredPolicy, Heuristic, NodeFactory, PriorityFrontier, Problem, ScoringFunction, SearchNode,
};
use ordered_float::OrderedFloat;
use tracing::info;

fn best_first_engine<P: Problem>(
    scoring_function: ScoringFunction<P::State, P::Action>,
    verbose: bool,
) -> GeneralSearch<P> {
    GeneralSearch::new(
        Box::new(PriorityFrontier::new()),
        ExploredPolicy::DominanceAware,
        NodeFactory::Scored(scoring_function),
        Expandability::Always,
        verbose,
    )
}

/// Greedy best-first search with an arbitrary scoring function `f`, nodes
/// with the lowest score are expanded first. There is no guarantee on the
/// cost of the plan found.
#[derive(Debug)]
pub struct GreedyBestFirstSearch<P: Problem> {
    engine: GeneralSearch<P>,
}

impl<P: Problem + 'static> GreedyBestFirstSearch<P> {
    pub fn new<F>(f: F, verbose: bool) -> Self
    where
        F: Fn(&SearchNode<P::State, P::Action>) -> f64 + 'static,
    {
        let scoring_function = move |node: &SearchNode<P::State, P::Action>| OrderedFloat(f(node));
        Self {
            engine: best_first_engine(Box::new(scoring_function), verbose),
        }
    }
}

impl<P: Problem> SearchEngine<P> for GreedyBestFirstSearch<P> {
    fn search(&mut self, problem: &P) -> (SearchResult, SearchStatistics) {
        info!(engine = "greedy-best-first");
        self.engine.search(problem)
    }
}

/// Uniform-cost search: nodes are scored by the cost of their path, so the
/// first plan found is a cheapest one.
#[derive(Debug)]
pub struct UniformCostSearch<P: Problem> {
    engine: GeneralSearch<P>,
}

impl<P: Problem + 'static> UniformCostSearch<P> {
    pub fn new(verbose: bool) -> Self {
        let scoring_function = |node: &SearchNode<P::State, P::Action>| node.get_path_cost();
        Self {
            engine: best_first_engine(Box::new(scoring_function), verbose),
        }
    }
}

impl<P: Problem> SearchEngine<P> for UniformCostSearch<P> {
    fn search(&mut self, problem: &P) -> (SearchResult, SearchStatistics) {
        info!(engine = "uniform-cost");
        self.engine.search(problem)
    }
}

/// A* search: nodes are scored by the cost of their path plus the heuristic
/// estimate of their state. The plan found is a cheapest one when the
/// heuristic never overestimates.
#[derive(Debug)]
pub struct AStarSearch<P: Problem> {
    engine: GeneralSearch<P>,
}

impl<P: Problem + 'static> AStarSearch<P> {
    pub fn new<H>(heuristic: H, verbose: bool) -> Self
    where
        H: Heuristic<P::State> + 'static,
    {
        let scoring_function = move |node: &SearchNode<P::State, P::Action>| {
            node.get_path_cost() + heuristic.evaluate(node.get_state())
        };
        Self {
            engine: best_first_engine(Box::new(scoring_function), verbose),
        }
    }
}

impl<P: Problem> SearchEngine<P> for AStarSearch<P> {
    fn search(&mut self, problem: &P) -> (SearchResult, SearchStatistics) {
        info!(engine = "astar");
        self.engine.search(problem)
    }
}
