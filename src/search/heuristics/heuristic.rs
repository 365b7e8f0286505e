use ordered_float::OrderedFloat;

pub type HeuristicValue = OrderedFloat<f64>;

/// An estimate of the cost still needed to reach a goal from a state.
///
/// Any `Fn(&S) -> f64` is a heuristic, so closures can be handed to the
/// informed search engines directly.
pub trait Heuristic<S> {
    /// Evaluate the given state.
    fn evaluate(&self, state: &S) -> HeuristicValue;

    /// Evaluate a batch of states. The default implementation simply calls
    /// `evaluate` for each state sequentially.
    fn evaluate_batch(&self, states: &[S]) -> Vec<HeuristicValue> {
        states.iter().map(|state| self.evaluate(state)).collect()
    }
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S) -> f64,
{
    fn evaluate(&self, state: &S) -> HeuristicValue {
        OrderedFloat(self(state))
    }
}
