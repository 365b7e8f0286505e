use crate::search::{frontiers::StateIndex, Frontier, HeuristicValue, NodeKey};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

/// Frontier ordered by node score, lowest first. Nodes with equal scores
/// leave the frontier in the order they entered it.
///
/// A node is only reported as contained if an entry with the same state has a
/// score no worse than its own. A better duplicate can therefore be pushed
/// while a worse one is queued; the worse entry is kept and both may be
/// expanded.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    queue: PriorityQueue<NodeKey, Reverse<(HeuristicValue, u64)>>,
    index: StateIndex,
    nodes_pushed: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, key: NodeKey) {
        self.index.insert(key);
        let priority = Reverse((key.score, self.nodes_pushed));
        self.queue.push(key, priority);
        self.nodes_pushed += 1;
    }

    fn pop(&mut self) -> Option<NodeKey> {
        let (key, _) = self.queue.pop()?;
        self.index.remove(&key);
        Some(key)
    }

    fn contains(&self, key: &NodeKey) -> bool {
        self.index.contains_dominating(key)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.index.clear();
        self.nodes_pushed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::node_key;

    #[test]
    fn pops_lowest_score_first() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(node_key(0, 0, 10.));
        frontier.push(node_key(1, 1, 5.));
        frontier.push(node_key(2, 2, 15.));

        assert_eq!(frontier.pop().map(|k| k.node_id.id()), Some(1));
        assert_eq!(frontier.pop().map(|k| k.node_id.id()), Some(0));
        assert_eq!(frontier.pop().map(|k| k.node_id.id()), Some(2));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn equal_scores_pop_in_insertion_order() {
        let mut frontier = PriorityFrontier::new();
        for node in [4, 2, 7, 1] {
            frontier.push(node_key(node, node, 3.));
        }
        let popped: Vec<usize> = std::iter::from_fn(|| frontier.pop())
            .map(|key| key.node_id.id())
            .collect();
        assert_eq!(popped, vec![4, 2, 7, 1]);
    }

    #[test]
    fn better_duplicates_are_not_contained_and_coexist() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(node_key(0, 9, 6.));

        assert!(frontier.contains(&node_key(1, 9, 6.)));
        assert!(frontier.contains(&node_key(1, 9, 8.)));
        assert!(!frontier.contains(&node_key(1, 9, 2.)));

        frontier.push(node_key(1, 9, 2.));
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop().map(|k| k.node_id.id()), Some(1));
        // The worse entry is still queued
        assert!(frontier.contains(&node_key(2, 9, 7.)));
        assert_eq!(frontier.pop().map(|k| k.node_id.id()), Some(0));
    }

    #[test]
    fn clear_restarts_the_insertion_counter() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(node_key(0, 0, 1.));
        frontier.clear();
        assert!(frontier.is_empty());
        assert_eq!(frontier.nodes_pushed, 0);
    }
}
