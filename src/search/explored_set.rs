use crate::search::{frontiers::StateIndex, NodeKey};
use strum_macros::EnumIs;

/// How an [`ExploredSet`] records nodes and answers membership queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIs)]
pub enum ExploredPolicy {
    /// Every node is kept and membership is plain state equality.
    Plain,
    /// Only the branch from the root to the last expanded node is kept.
    /// Before a node is added, the nodes of abandoned branches are dropped
    /// from the top until the parent of the new node is on top.
    BranchPruning,
    /// Every node is kept. A node is contained only if an equal state was
    /// explored with a score no worse than its own.
    DominanceAware,
}

/// The closed list of a search.
#[derive(Debug)]
pub struct ExploredSet {
    policy: ExploredPolicy,
    nodes: Vec<NodeKey>,
    index: StateIndex,
}

impl ExploredSet {
    pub fn new(policy: ExploredPolicy) -> Self {
        Self {
            policy,
            nodes: Vec::new(),
            index: StateIndex::new(),
        }
    }

    pub fn get_policy(&self) -> ExploredPolicy {
        self.policy
    }

    pub fn add(&mut self, key: NodeKey) {
        if self.policy.is_branch_pruning() {
            self.unwind_to_parent(&key);
        }
        self.index.insert(key);
        self.nodes.push(key);
    }

    fn unwind_to_parent(&mut self, key: &NodeKey) {
        while let Some(last) = self.nodes.last() {
            if Some(last.node_id) == key.parent_id {
                break;
            }
            let last = *last;
            self.nodes.pop();
            self.index.remove(&last);
        }
        debug_assert!(
            key.parent_id.is_none() || !self.nodes.is_empty(),
            "the parent of an expanded node must be on the current branch"
        );
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        match self.policy {
            ExploredPolicy::Plain | ExploredPolicy::BranchPruning => self.index.contains_state(key),
            ExploredPolicy::DominanceAware => self.index.contains_dominating(key),
        }
    }

    /// The recorded nodes, in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &NodeKey> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }
}
