use crate::search::{
    search_engines::{DepthLimitedSearch, SearchEngine, SearchResult, SearchStatistics},
    Problem, SearchError,
};
use tracing::{debug, info};

/// Iterative deepening search: depth-limited search with the bounds
/// `initial_bound..final_bound`, one after the other. Every bound gets a fresh
/// depth-limited engine.
///
/// The first non-empty plan is returned. An empty plan, i.e. an initial state
/// that is already a goal, does not stop the deepening, so such a problem
/// ends without a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterativeDeepeningSearch {
    initial_bound: usize,
    final_bound: usize,
    verbose: bool,
}

impl IterativeDeepeningSearch {
    pub fn new(
        initial_bound: usize,
        final_bound: usize,
        verbose: bool,
    ) -> Result<Self, SearchError> {
        if initial_bound > final_bound {
            return Err(SearchError::InvalidBounds {
                initial_bound,
                final_bound,
            });
        }
        Ok(Self {
            initial_bound,
            final_bound,
            verbose,
        })
    }

    pub fn get_bounds(&self) -> (usize, usize) {
        (self.initial_bound, self.final_bound)
    }
}

impl<P: Problem> SearchEngine<P> for IterativeDeepeningSearch {
    fn search(&mut self, problem: &P) -> (SearchResult, SearchStatistics) {
        info!(
            engine = "iterative-deepening",
            initial_bound = self.initial_bound,
            final_bound = self.final_bound
        );
        let mut statistics = SearchStatistics::new();
        for bound in self.initial_bound..self.final_bound {
            debug!(bound, "starting depth-limited search");
            let mut engine = DepthLimitedSearch::new(bound, self.verbose);
            match engine.run(problem, &mut statistics) {
                SearchResult::Success(plan) if !plan.is_empty() => {
                    info!(bound, "plan found");
                    statistics.finalise_search();
                    return (SearchResult::Success(plan), statistics);
                }
                _ => debug!(bound, "no plan within bound"),
            }
        }
        statistics.finalise_search();
        (SearchResult::NoSolution, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_engines::BreadthFirstSearch;
    use crate::test_utils::*;

    #[test]
    fn rejects_decreasing_bounds() {
        assert!(matches!(
            IterativeDeepeningSearch::new(4, 2, false),
            Err(SearchError::InvalidBounds {
                initial_bound: 4,
                final_bound: 2
            })
        ));
        assert!(IterativeDeepeningSearch::new(2, 2, false).is_ok());
    }

    #[test]
    fn matches_breadth_first_on_shallowest_plan() {
        let problem = romania_graph();
        let mut engine = IterativeDeepeningSearch::new(0, 10, false).unwrap();
        let (result, _) = engine.search(&problem);

        let mut breadth_first = BreadthFirstSearch::new(false);
        let (expected, _) = breadth_first.search(&problem);
        assert_eq!(result, expected);
    }

    #[test]
    fn final_bound_too_small_gives_no_solution() {
        // The shallowest plan needs 3 actions, so bound 3 is required
        let problem = romania_graph();
        let mut engine = IterativeDeepeningSearch::new(0, 3, false).unwrap();
        let (result, _) = engine.search(&problem);
        assert!(result.is_no_solution());

        let mut engine = IterativeDeepeningSearch::new(3, 4, true).unwrap();
        let (result, _) = engine.search(&problem);
        assert_eq!(result.into_plan().map(|plan| plan.len()), Some(3));
    }

    #[test]
    fn empty_plans_do_not_stop_deepening() {
        let problem = CountingProblem::new(0, vec![1], 10);
        let mut engine = IterativeDeepeningSearch::new(0, 5, false).unwrap();
        let (result, _) = engine.search(&problem);
        assert!(result.is_no_solution());
    }

    #[test]
    fn unreachable_goal_gives_no_solution() {
        let problem = disconnected_graph();
        let mut engine = IterativeDeepeningSearch::new(0, 6, false).unwrap();
        let (result, statistics) = engine.search(&problem);
        assert!(result.is_no_solution());
        assert!(statistics.get_expanded_nodes() > 0);
    }
}
