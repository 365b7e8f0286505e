use crate::search::{NodeKey, StateId};
use smallvec::SmallVec;
use std::collections::HashMap;

/// Hash index from a state to the container entries holding it. Containers
/// keep their own pop order and use the index only to answer membership
/// queries in constant time.
#[derive(Debug, Default)]
pub struct StateIndex {
    entries: HashMap<StateId, SmallVec<[NodeKey; 2]>>,
}

impl StateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: NodeKey) {
        self.entries.entry(key.state_id).or_default().push(key);
    }

    /// Remove the entry of `key.node_id`, if present.
    pub fn remove(&mut self, key: &NodeKey) {
        if let Some(keys) = self.entries.get_mut(&key.state_id) {
            if let Some(position) = keys.iter().position(|k| k.node_id == key.node_id) {
                keys.swap_remove(position);
            }
            if keys.is_empty() {
                self.entries.remove(&key.state_id);
            }
        }
    }

    /// Whether some entry has the same state as `key`.
    pub fn contains_state(&self, key: &NodeKey) -> bool {
        self.entries.contains_key(&key.state_id)
    }

    /// Whether some entry has the same state as `key` and a score no worse
    /// than it.
    pub fn contains_dominating(&self, key: &NodeKey) -> bool {
        self.entries
            .get(&key.state_id)
            .is_some_and(|keys| keys.iter().any(|k| k.score <= key.score))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
