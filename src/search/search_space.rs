use crate::search::{Action, NodeFactory, NodeId, Plan, SearchNode};
use segvec::{Linear, SegVec};
use std::{collections::HashMap, hash::Hash};

/// Identifier shared by all nodes of a search space whose states are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(usize);

impl StateId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// A [`SearchSpace`] owns every node built during one search. Nodes refer to
/// their parent through a [`NodeId`], so the frontier and explored containers
/// only hold handles and never own a node.
///
/// States are interned: every distinct state is given a [`StateId`] the first
/// time it is seen, and membership tests compare these ids instead of the
/// states themselves. Unlike the registry of a graph search, several nodes
/// may share the same state, e.g. when a cheaper path to an already queued
/// state is found.
#[derive(Debug)]
pub struct SearchSpace<S, A> {
    nodes: SegVec<SearchNode<S, A>, Linear>,
    registered_states: HashMap<S, StateId>,
}

impl<S, A> SearchSpace<S, A>
where
    S: Clone + Eq + Hash,
    A: Action<S>,
{
    pub fn new() -> Self {
        Self {
            nodes: SegVec::new(),
            registered_states: HashMap::new(),
        }
    }

    fn register_state(&mut self, state: &S) -> StateId {
        let next_id = StateId::new(self.registered_states.len());
        *self
            .registered_states
            .entry(state.clone())
            .or_insert(next_id)
    }

    fn next_node_id(&self) -> NodeId {
        NodeId::new(self.nodes.len())
    }

    pub fn insert_root_node(&mut self, factory: &NodeFactory<S, A>, state: S) -> NodeId {
        let state_id = self.register_state(&state);
        let node_id = self.next_node_id();
        self.nodes
            .push(factory.new_root_node(node_id, state_id, state));
        node_id
    }

    /// Apply `action` to the state of `parent_id` and store the resulting
    /// node.
    pub fn insert_node(
        &mut self,
        factory: &NodeFactory<S, A>,
        parent_id: NodeId,
        action: A,
    ) -> NodeId {
        let state = action.apply(self.get_node(parent_id).get_state());
        let state_id = self.register_state(&state);
        let node_id = self.next_node_id();
        let node = factory.new_node(node_id, self.get_node(parent_id), action, state_id, state);
        self.nodes.push(node);
        node_id
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S, A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    /// Walk the parent links from `goal_id` back to the root and collect the
    /// action names in root-to-goal order.
    pub fn extract_plan(&self, goal_id: NodeId) -> Plan {
        let mut steps = vec![];
        let mut current_node = self.get_node(goal_id);
        while let Some(parent_id) = current_node.get_parent_id() {
            if let Some(action) = current_node.get_action() {
                steps.push(action.name().to_string());
            }
            current_node = self.get_node(parent_id);
        }
        steps.reverse();
        Plan::new(steps)
    }

    /// Number of nodes built so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Number of distinct states seen so far.
    pub fn num_states(&self) -> usize {
        self.registered_states.len()
    }
}

impl<S, A> Default for SearchSpace<S, A>
where
    S: Clone + Eq + Hash,
    A: Action<S>,
{
    fn default() -> Self {
        Self::new()
    }
}
