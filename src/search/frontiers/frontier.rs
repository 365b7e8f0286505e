use crate::search::NodeKey;
use std::fmt::Debug;

/// The open list of a search: nodes generated but not yet expanded.
///
/// `contains` is the duplicate test used before pushing a successor. It is
/// based on state equality, not on node identity, and each frontier decides
/// how the scores of equal states are taken into account.
pub trait Frontier: Debug {
    fn push(&mut self, key: NodeKey);

    /// Remove and return the next node to expand, `None` if the frontier is
    /// empty.
    fn pop(&mut self) -> Option<NodeKey>;

    fn contains(&self, key: &NodeKey) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}
