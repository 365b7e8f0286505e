//! Depth first search, plain and bounded.
//!
//! Both engines only remember the branch they are currently exploring: the
//! explored set drops the nodes of a branch once the search backtracks out of
//! it. A state is therefore only recognised as a duplicate if it is on the
//! current branch or waiting in the frontier.

use crate::search::{
    search_engines::{Expandability, GeneralSearch, SearchEngine, SearchResult, SearchStatistics},
    ExploredPolicy, ExploredSet, NodeFactory, NodeStack, Problem,
};
use tracing::info;

/// Depth-first search. Nodes are expanded most recently generated first.
#[derive(Debug)]
pub struct DepthFirstSearch<P: Problem> {
    engine: GeneralSearch<P>,
}

impl<P: Problem> DepthFirstSearch<P> {
    pub fn new(verbose: bool) -> Self {
        Self {
            engine: GeneralSearch::new(
                Box::new(NodeStack::new()),
                ExploredPolicy::BranchPruning,
                NodeFactory::unscored(verbose),
                Expandability::Always,
                verbose,
            ),
        }
    }

    /// The branch explored last, from the root to the last expanded node.
    pub fn explored(&self) -> &ExploredSet {
        self.engine.explored()
    }
}

impl<P: Problem> SearchEngine<P> for DepthFirstSearch<P> {
    fn search(&mut self, problem: &P) -> (SearchResult, SearchStatistics) {
        info!(engine = "depth-first");
        self.engine.search(problem)
    }
}

/// Depth-first search that does not expand nodes at depth `bound` or deeper.
/// A plan longer than `bound` actions is never found.
#[derive(Debug)]
pub struct DepthLimitedSearch<P: Problem> {
    engine: GeneralSearch<P>,
    bound: usize,
}

impl<P: Problem> DepthLimitedSearch<P> {
    pub fn new(bound: usize, verbose: bool) -> Self {
        Self {
            engine: GeneralSearch::new(
                Box::new(NodeStack::new()),
                ExploredPolicy::BranchPruning,
                NodeFactory::DepthTracked,
                Expandability::DepthBelow(bound),
                verbose,
            ),
            bound,
        }
    }

    pub fn get_bound(&self) -> usize {
        self.bound
    }

    pub fn explored(&self) -> &ExploredSet {
        self.engine.explored()
    }

    /// Run the bounded search without logging the start and end of a search,
    /// for engines that run several bounded searches in a row.
    pub(crate) fn run(&mut self, problem: &P, statistics: &mut SearchStatistics) -> SearchResult {
        self.engine.run(problem, statistics)
    }
}

impl<P: Problem> SearchEngine<P> for DepthLimitedSearch<P> {
    fn search(&mut self, problem: &P) -> (SearchResult, SearchStatistics) {
        info!(engine = "depth-limited", bound = self.bound);
        self.engine.search(problem)
    }
}
