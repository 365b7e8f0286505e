use crate::search::{frontiers::StateIndex, Frontier, NodeKey};
use std::collections::VecDeque;

/// First-in first-out frontier, used by breadth-first search.
#[derive(Debug, Default)]
pub struct NodeQueue {
    nodes: VecDeque<NodeKey>,
    index: StateIndex,
}

impl NodeQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for NodeQueue {
    fn push(&mut self, key: NodeKey) {
        self.index.insert(key);
        self.nodes.push_back(key);
    }

    fn pop(&mut self) -> Option<NodeKey> {
        let key = self.nodes.pop_front()?;
        self.index.remove(&key);
        Some(key)
    }

    fn contains(&self, key: &NodeKey) -> bool {
        self.index.contains_state(key)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }
}
