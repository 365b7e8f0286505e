//! The search loop shared by every engine. Engines only differ in which
//! frontier, explored set and node factory they plug in, and in whether a node
//! may be expanded.

use crate::search::{
    search_engines::{SearchEngine, SearchResult, SearchStatistics},
    ExploredPolicy, ExploredSet, Frontier, NodeFactory, NodeKey, Problem, SearchNode, SearchSpace,
};
use tracing::{info, trace};

/// Decides whether a popped node that is not a goal gets its successors
/// generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expandability {
    Always,
    /// Only nodes strictly shallower than the bound are expanded.
    DepthBelow(usize),
}

impl Expandability {
    pub fn allows<S, A>(&self, node: &SearchNode<S, A>) -> bool {
        match self {
            Expandability::Always => true,
            Expandability::DepthBelow(bound) => {
                node.get_depth().map_or(true, |depth| depth < *bound)
            }
        }
    }
}

#[derive(Debug)]
pub struct GeneralSearch<P: Problem> {
    frontier: Box<dyn Frontier>,
    explored: ExploredSet,
    node_factory: NodeFactory<P::State, P::Action>,
    expandability: Expandability,
    verbose: bool,
}

impl<P: Problem> GeneralSearch<P> {
    pub fn new(
        frontier: Box<dyn Frontier>,
        explored_policy: ExploredPolicy,
        node_factory: NodeFactory<P::State, P::Action>,
        expandability: Expandability,
        verbose: bool,
    ) -> Self {
        Self {
            frontier,
            explored: ExploredSet::new(explored_policy),
            node_factory,
            expandability,
            verbose,
        }
    }

    /// The nodes explored by the last search.
    pub fn explored(&self) -> &ExploredSet {
        &self.explored
    }

    fn is_new(&self, key: &NodeKey) -> bool {
        !self.frontier.contains(key) && !self.explored.contains(key)
    }

    fn trace_node(&self, node: &SearchNode<P::State, P::Action>) {
        if self.verbose {
            let indent = "  ".repeat(node.get_depth().unwrap_or(0));
            info!("{}Node: {}", indent, node);
        }
    }

    /// Run the search loop, accumulating counters into `statistics`.
    pub fn run(&mut self, problem: &P, statistics: &mut SearchStatistics) -> SearchResult {
        self.frontier.clear();
        self.explored.clear();

        let mut search_space = SearchSpace::new();
        let root_id = search_space.insert_root_node(&self.node_factory, problem.initial_state());
        self.frontier.push(search_space.get_node(root_id).key());
        statistics.increment_generated_nodes();
        statistics.record_frontier_size(self.frontier.len());

        while let Some(key) = self.frontier.pop() {
            let node = search_space.get_node(key.node_id);
            self.trace_node(node);

            if problem.is_goal(node.get_state()) {
                return SearchResult::Success(search_space.extract_plan(key.node_id));
            }

            self.explored.add(key);
            if !self.expandability.allows(node) {
                continue;
            }
            statistics.increment_expanded_nodes();

            for action in problem.applicable_actions(node.get_state()) {
                let child_id = search_space.insert_node(&self.node_factory, key.node_id, action);
                let child_key = search_space.get_node(child_id).key();
                statistics.increment_generated_nodes();
                if self.is_new(&child_key) {
                    self.frontier.push(child_key);
                } else {
                    trace!(node_id = child_id.id(), "duplicate node discarded");
                    statistics.increment_duplicate_nodes();
                }
            }
            statistics.record_frontier_size(self.frontier.len());
        }

        SearchResult::NoSolution
    }
}

impl<P: Problem> SearchEngine<P> for GeneralSearch<P> {
    fn search(&mut self, problem: &P) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let result = self.run(problem, &mut statistics);
        statistics.finalise_search();
        (result, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{NodeQueue, Plan};
    use crate::test_utils::*;

    #[test]
    fn depth_bound_limits_expansion() {
        let node_factory = NodeFactory::DepthTracked;
        let mut space = SearchSpace::new();
        let root = space.insert_root_node(&node_factory, 0u32);
        let child = space.insert_node(&node_factory, root, Step::new(1));

        let bounded = Expandability::DepthBelow(1);
        assert!(bounded.allows(space.get_node(root)));
        assert!(!bounded.allows(space.get_node(child)));
        assert!(Expandability::Always.allows(space.get_node(child)));
    }

    #[test]
    fn goal_at_root_gives_empty_plan() {
        let problem = CountingProblem::new(0, vec![1], 10);
        let mut engine: GeneralSearch<CountingProblem> = GeneralSearch::new(
            Box::new(NodeQueue::new()),
            ExploredPolicy::Plain,
            NodeFactory::Simple,
            Expandability::Always,
            false,
        );
        let (result, statistics) = engine.search(&problem);
        assert_eq!(result, SearchResult::Success(Plan::empty()));
        assert_eq!(statistics.get_expanded_nodes(), 0);
    }

    #[test]
    fn search_resets_between_runs() {
        let mut engine: GeneralSearch<CountingProblem> = GeneralSearch::new(
            Box::new(NodeQueue::new()),
            ExploredPolicy::Plain,
            NodeFactory::Simple,
            Expandability::Always,
            true,
        );
        let first = CountingProblem::new(3, vec![1], 10);
        let second = CountingProblem::new(2, vec![1], 10);

        let (result, _) = engine.search(&first);
        assert_eq!(result.into_plan().map(|plan| plan.len()), Some(3));
        let (result, _) = engine.search(&second);
        assert_eq!(result.into_plan().map(|plan| plan.len()), Some(2));
    }

    #[test]
    fn successors_follow_action_order() {
        // +2 is generated before +1, so the goal is queued first through it
        let problem = CountingProblem::new(2, vec![2, 1], 10);
        let mut engine: GeneralSearch<CountingProblem> = GeneralSearch::new(
            Box::new(NodeQueue::new()),
            ExploredPolicy::Plain,
            NodeFactory::Simple,
            Expandability::Always,
            false,
        );
        let (result, _) = engine.search(&problem);
        let plan = result.into_plan().expect("plan should be found");
        assert_eq!(plan.steps(), ["+2"]);
        assert_eq!(problem.expanded_states(), vec![0]);
    }
}
