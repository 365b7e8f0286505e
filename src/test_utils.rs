use crate::search::{Action, NodeId, NodeKey, Problem, StateId};
use ordered_float::OrderedFloat;
use std::cell::RefCell;

pub use crate::problems::{GraphMove, GraphProblem};

pub const ROMANIA_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/demos/romania.toml"
));

pub const EIGHT_PUZZLE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/demos/eight_puzzle.toml"
));

/// Route finding in Romania, from Arad to Bucharest, with straight-line
/// distances to Bucharest as heuristic.
pub fn romania_graph() -> GraphProblem {
    GraphProblem::from_text(ROMANIA_TEXT).unwrap()
}

/// A -> B -> D costs 2, A -> C -> D costs 6.
pub fn diamond_graph() -> GraphProblem {
    GraphProblem::from_edges(
        "A",
        &["D"],
        &[
            ("A", "B", 1.),
            ("A", "C", 5.),
            ("B", "D", 1.),
            ("C", "D", 1.),
        ],
    )
    .unwrap()
}

/// The goal D cannot be reached from A.
pub fn disconnected_graph() -> GraphProblem {
    GraphProblem::from_edges("A", &["D"], &[("A", "B", 1.), ("C", "D", 1.)]).unwrap()
}

/// Adds a fixed amount to a counter, costing that amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    amount: u32,
    name: String,
}

impl Step {
    pub fn new(amount: u32) -> Self {
        Self {
            amount,
            name: format!("+{}", amount),
        }
    }
}

impl Action<u32> for Step {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, state: &u32) -> u32 {
        state + self.amount
    }

    fn cost_to_apply(&self, _state: &u32) -> f64 {
        f64::from(self.amount)
    }
}

/// Count from 0 to `target` with the given steps. States at or above
/// `limit` have no successors. The states whose successors were requested
/// are recorded, in order.
#[derive(Debug)]
pub struct CountingProblem {
    target: u32,
    steps: Vec<u32>,
    limit: u32,
    expanded: RefCell<Vec<u32>>,
}

impl CountingProblem {
    pub fn new(target: u32, steps: Vec<u32>, limit: u32) -> Self {
        Self {
            target,
            steps,
            limit,
            expanded: RefCell::new(vec![]),
        }
    }

    pub fn expanded_states(&self) -> Vec<u32> {
        self.expanded.borrow().clone()
    }
}

impl Problem for CountingProblem {
    type State = u32;
    type Action = Step;

    fn initial_state(&self) -> u32 {
        0
    }

    fn applicable_actions(&self, state: &u32) -> Vec<Step> {
        self.expanded.borrow_mut().push(*state);
        if *state >= self.limit {
            return vec![];
        }
        self.steps.iter().map(|&amount| Step::new(amount)).collect()
    }

    fn is_goal(&self, state: &u32) -> bool {
        *state == self.target
    }
}

/// Key of a root node.
pub fn node_key(node: usize, state: usize, score: f64) -> NodeKey {
    NodeKey {
        node_id: NodeId::new(node),
        state_id: StateId::new(state),
        parent_id: None,
        score: OrderedFloat(score),
    }
}

/// Key of an unscored node with the given parent.
pub fn child_key(node: usize, state: usize, parent: usize) -> NodeKey {
    NodeKey {
        node_id: NodeId::new(node),
        state_id: StateId::new(state),
        parent_id: Some(NodeId::new(parent)),
        score: OrderedFloat(0.),
    }
}
