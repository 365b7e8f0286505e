//! Breadth first search

use crate::search::{
    search_engines::{Expandability, GeneralSearch, SearchEngine, SearchResult, SearchStatistics},
    ExploredPolicy, NodeFactory, NodeQueue, Problem,
};
use tracing::info;

/// Breadth-first search. Nodes are expanded in the order they were
/// generated, so the first plan found has the fewest actions.
#[derive(Debug)]
pub struct BreadthFirstSearch<P: Problem> {
    engine: GeneralSearch<P>,
}

impl<P: Problem> BreadthFirstSearch<P> {
    pub fn new(verbose: bool) -> Self {
        Self {
            engine: GeneralSearch::new(
                Box::new(NodeQueue::new()),
                ExploredPolicy::Plain,
                NodeFactory::unscored(verbose),
                Expandability::Always,
                verbose,
            ),
        }
    }
}

impl<P: Problem> SearchEngine<P> for BreadthFirstSearch<P> {
    fn search(&mut self, problem: &P) -> (SearchResult, SearchStatistics) {
        info!(engine = "breadth-first");
        self.engine.search(problem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::validate;
    use crate::test_utils::*;

    #[test]
    fn diamond_plan_has_two_actions() {
        let problem = diamond_graph();
        let mut engine = BreadthFirstSearch::new(false);
        let (result, _) = engine.search(&problem);
        let plan = result.into_plan().expect("plan should be found");

        assert_eq!(plan.len(), 2);
        assert!(
            plan.steps() == ["A→B", "B→D"] || plan.steps() == ["A→C", "C→D"],
            "unexpected plan {:?}",
            plan
        );
        assert_eq!(validate(&plan, &problem), Ok(()));
    }

    #[test]
    fn finds_plan_with_fewest_actions() {
        let problem = romania_graph();
        let mut engine = BreadthFirstSearch::new(false);
        let (result, statistics) = engine.search(&problem);
        let plan = result.into_plan().expect("plan should be found");

        assert_eq!(
            plan.steps(),
            ["Arad→Sibiu", "Sibiu→Fagaras", "Fagaras→Bucharest"]
        );
        assert!(statistics.get_expanded_nodes() > 0);
    }

    #[test]
    fn prefers_one_long_step_over_many_short_ones() {
        // Six +1 steps reach the goal too, but +6 needs a single action
        let problem = CountingProblem::new(6, vec![1, 6], 20);
        let mut engine = BreadthFirstSearch::new(true);
        let (result, _) = engine.search(&problem);
        assert_eq!(result.into_plan().map(|plan| plan.len()), Some(1));
    }

    #[test]
    fn repeated_searches_are_deterministic() {
        let problem = romania_graph();
        let mut engine = BreadthFirstSearch::new(false);
        let (first, _) = engine.search(&problem);
        let (second, _) = engine.search(&problem);
        assert_eq!(first, second);
    }

    #[test]
    fn unreachable_goal_gives_no_solution() {
        let problem = disconnected_graph();
        let mut engine = BreadthFirstSearch::new(false);
        let (result, _) = engine.search(&problem);
        assert!(result.is_no_solution());
    }
}
