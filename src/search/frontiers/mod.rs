mod frontier;
mod node_queue;
mod node_stack;
mod priority_frontier;
mod state_index;

pub use frontier::Frontier;
pub use node_queue::NodeQueue;
pub use node_stack::NodeStack;
pub use priority_frontier::PriorityFrontier;
pub use state_index::StateIndex;
