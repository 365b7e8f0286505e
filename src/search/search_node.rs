use crate::search::{Action, HeuristicValue, StateId};
use std::fmt::{self, Debug, Display};

/// Handle of a node inside a [`crate::search::SearchSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// The metadata a node carries on top of its state, parent and action. Which
/// variant is built is decided by the [`NodeFactory`] of the search engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeMetadata {
    /// No metadata at all.
    Simple,
    /// Distance from the root, in actions.
    DepthTracked { depth: usize },
    /// Depth, accumulated action cost from the root, and the score the
    /// scoring function gave the node when it was built.
    Scored {
        depth: usize,
        path_cost: HeuristicValue,
        score: HeuristicValue,
    },
}

/// The part of a node the frontier and explored containers work with. It is
/// cheap to copy and does not depend on the problem types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub node_id: NodeId,
    pub state_id: StateId,
    pub parent_id: Option<NodeId>,
    /// The node score, zero for nodes that are not scored.
    pub score: HeuristicValue,
}

/// A [`SearchNode`] records a visited state together with how it was
/// reached. Nodes are never modified once built; the parent is a handle into
/// the same search space and is only used to rebuild the path.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    node_id: NodeId,
    state_id: StateId,
    state: S,
    parent_id: Option<NodeId>,
    action: Option<A>,
    metadata: NodeMetadata,
}

impl<S, A> SearchNode<S, A> {
    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_state_id(&self) -> StateId {
        self.state_id
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    /// The action that produced this node, `None` for the root.
    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn get_metadata(&self) -> NodeMetadata {
        self.metadata
    }

    /// Roots are the nodes without a parent, whatever their depth.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// The depth of the node, if the node variant tracks it.
    pub fn get_depth(&self) -> Option<usize> {
        match self.metadata {
            NodeMetadata::Simple => None,
            NodeMetadata::DepthTracked { depth } | NodeMetadata::Scored { depth, .. } => {
                Some(depth)
            }
        }
    }

    /// The accumulated action cost from the root. Only scored nodes track
    /// it, other variants report zero.
    pub fn get_path_cost(&self) -> HeuristicValue {
        match self.metadata {
            NodeMetadata::Scored { path_cost, .. } => path_cost,
            _ => HeuristicValue::from(0.),
        }
    }

    pub fn get_score(&self) -> Option<HeuristicValue> {
        match self.metadata {
            NodeMetadata::Scored { score, .. } => Some(score),
            _ => None,
        }
    }

    pub fn key(&self) -> NodeKey {
        NodeKey {
            node_id: self.node_id,
            state_id: self.state_id,
            parent_id: self.parent_id,
            score: self.get_score().unwrap_or_else(|| HeuristicValue::from(0.)),
        }
    }
}

impl<S: Debug, A> Display for SearchNode<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.metadata {
            NodeMetadata::Simple => write!(f, "State: {:?}", self.state),
            NodeMetadata::DepthTracked { depth } => {
                write!(f, "State: {:?}; Depth: {}", self.state, depth)
            }
            NodeMetadata::Scored {
                depth,
                path_cost,
                score,
            } => write!(
                f,
                "State: {:?}; Depth: {}; Score: {}; Cost: {}",
                self.state, depth, score, path_cost
            ),
        }
    }
}

/// A function giving a score to a node, lower scores are expanded first.
pub type ScoringFunction<S, A> = Box<dyn Fn(&SearchNode<S, A>) -> HeuristicValue>;

/// Builds the nodes of a search. The factory decides which
/// [`NodeMetadata`] variant every node gets, and owns the scoring function
/// used for scored nodes so that the score is computed exactly once, when the
/// node is built.
pub enum NodeFactory<S, A> {
    Simple,
    DepthTracked,
    Scored(ScoringFunction<S, A>),
}

impl<S, A> Debug for NodeFactory<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeFactory::Simple => write!(f, "NodeFactory::Simple"),
            NodeFactory::DepthTracked => write!(f, "NodeFactory::DepthTracked"),
            NodeFactory::Scored(_) => write!(f, "NodeFactory::Scored(..)"),
        }
    }
}

impl<S, A> NodeFactory<S, A> {
    /// The factory of the uninformed engines: simple nodes, or depth-tracked
    /// nodes when the search trace is on so that it can be indented by depth.
    pub fn unscored(verbose: bool) -> Self {
        if verbose {
            NodeFactory::DepthTracked
        } else {
            NodeFactory::Simple
        }
    }
}

impl<S, A> NodeFactory<S, A>
where
    A: Action<S>,
{
    pub fn new_root_node(&self, node_id: NodeId, state_id: StateId, state: S) -> SearchNode<S, A> {
        let metadata = match self {
            NodeFactory::Simple => NodeMetadata::Simple,
            NodeFactory::DepthTracked => NodeMetadata::DepthTracked { depth: 0 },
            NodeFactory::Scored(_) => NodeMetadata::Scored {
                depth: 0,
                path_cost: HeuristicValue::from(0.),
                score: HeuristicValue::from(0.),
            },
        };
        self.finish(SearchNode {
            node_id,
            state_id,
            state,
            parent_id: None,
            action: None,
            metadata,
        })
    }

    /// Build the node reached from `parent` by `action`. The successor state
    /// is expected to be `action.apply(parent.get_state())`.
    pub fn new_node(
        &self,
        node_id: NodeId,
        parent: &SearchNode<S, A>,
        action: A,
        state_id: StateId,
        state: S,
    ) -> SearchNode<S, A> {
        let depth = parent.get_depth().map_or(0, |depth| depth + 1);
        let metadata = match self {
            NodeFactory::Simple => NodeMetadata::Simple,
            NodeFactory::DepthTracked => NodeMetadata::DepthTracked { depth },
            NodeFactory::Scored(_) => {
                let step_cost = action.cost_to_apply(parent.get_state());
                debug_assert!(step_cost >= 0., "action costs must be non-negative");
                NodeMetadata::Scored {
                    depth,
                    path_cost: parent.get_path_cost() + HeuristicValue::from(step_cost),
                    score: HeuristicValue::from(0.),
                }
            }
        };
        self.finish(SearchNode {
            node_id,
            state_id,
            state,
            parent_id: Some(parent.get_node_id()),
            action: Some(action),
            metadata,
        })
    }

    fn finish(&self, mut node: SearchNode<S, A>) -> SearchNode<S, A> {
        if let NodeFactory::Scored(scoring_function) = self {
            let score = scoring_function(&node);
            if let NodeMetadata::Scored { score: slot, .. } = &mut node.metadata {
                *slot = score;
            }
        }
        node
    }
}
