//! The interface between the search engines and the problem being solved.
//!
//! The engines never look inside a state: everything they need is expressed
//! through [`Problem`] and [`Action`]. Both traits are trusted, the engines do
//! not check that an action is really applicable to the state it is applied
//! to, and a problem whose `applicable_actions` never returns is simply never
//! left.

use std::fmt::Debug;
use std::hash::Hash;

/// An action that transforms one state into a successor state.
pub trait Action<S> {
    /// The identifier collected into a [`crate::search::Plan`].
    fn name(&self) -> &str;

    /// Produce the state that results from applying this action to `state`.
    fn apply(&self, state: &S) -> S;

    /// The cost of applying this action in `state`. Must be non-negative.
    fn cost_to_apply(&self, state: &S) -> f64;
}

/// A search problem, i.e. an initial state, the actions applicable in each
/// state and a goal test.
///
/// States are compared with `Eq` and hashed with `Hash`; two states that are
/// equal must hash to the same value. Actions must be `Debug` so that the
/// engines holding them can be printed.
pub trait Problem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Action<Self::State> + Debug;

    fn initial_state(&self) -> Self::State;

    /// The actions applicable in `state`. Successors are generated in the
    /// order returned here.
    fn applicable_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    fn is_goal(&self, state: &Self::State) -> bool;
}
