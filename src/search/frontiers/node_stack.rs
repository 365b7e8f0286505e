use crate::search::{frontiers::StateIndex, Frontier, NodeKey};

/// Last-in first-out frontier, used by the depth-first family.
#[derive(Debug, Default)]
pub struct NodeStack {
    nodes: Vec<NodeKey>,
    index: StateIndex,
}

impl NodeStack {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for NodeStack {
    fn push(&mut self, key: NodeKey) {
        self.index.insert(key);
        self.nodes.push(key);
    }

    fn pop(&mut self) -> Option<NodeKey> {
        let key = self.nodes.pop()?;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::node_key;

    #[test]
    fn pops_most_recent_first() {
        let mut stack = NodeStack::new();
        stack.push(node_key(0, 0, 0.));
        stack.push(node_key(1, 1, 0.));
        stack.push(node_key(2, 2, 0.));

        let popped: Vec<usize> = std::iter::from_fn(|| stack.pop())
            .map(|key| key.node_id.id())
            .collect();
        assert_eq!(popped, vec![2, 1, 0]);
    }

    #[test]
    fn contains_tracks_pushes_and_pops() {
        let mut stack = NodeStack::new();
        stack.push(node_key(0, 3, 0.));
        stack.push(node_key(1, 3, 0.));
        assert_eq!(stack.len(), 2);

        stack.pop();
        assert!(stack.contains(&node_key(2, 3, 0.)));
        stack.pop();
        assert!(!stack.contains(&node_key(2, 3, 0.)));
    }
}
