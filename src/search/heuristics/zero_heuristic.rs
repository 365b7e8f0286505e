use crate::search::{Heuristic, HeuristicValue};

/// The heuristic that estimates every state as already at the goal. A* with
/// this heuristic expands nodes in the same order as uniform-cost search.
#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl<S> Heuristic<S> for ZeroHeuristic {
    fn evaluate(&self, _state: &S) -> HeuristicValue {
        (0.).into()
    }
}
