use crate::search::{Action, Plan, Problem};

/// Replay `plan` from the initial state of `problem`, returning the final
/// state and the accumulated cost. Each step is matched by name against the
/// actions applicable in the current state.
fn replay<P: Problem>(plan: &Plan, problem: &P) -> Result<(P::State, f64), String> {
    let mut cur_state = problem.initial_state();
    let mut cost = 0.;
    for step in plan.steps() {
        let action = problem
            .applicable_actions(&cur_state)
            .into_iter()
            .find(|action| action.name() == step)
            .ok_or_else(|| {
                format!("Action {} is not applicable in state {:?}", step, cur_state)
            })?;
        cost += action.cost_to_apply(&cur_state);
        cur_state = action.apply(&cur_state);
    }
    Ok((cur_state, cost))
}

pub fn validate<P: Problem>(plan: &Plan, problem: &P) -> Result<(), String> {
    let (final_state, _) = replay(plan, problem)?;
    if !problem.is_goal(&final_state) {
        return Err(format!(
            "Plan does not reach goal state, final state is: {:?}",
            final_state
        ));
    }
    Ok(())
}

/// The total cost of applying `plan` from the initial state.
pub fn plan_cost<P: Problem>(plan: &Plan, problem: &P) -> Result<f64, String> {
    replay(plan, problem).map(|(_, cost)| cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn validate_plan(steps: &[&str]) -> Result<(), String> {
        let problem = diamond_graph();
        let plan: Plan = steps.iter().copied().collect();
        validate(&plan, &problem)
    }

    #[test]
    fn validate_good_plan_ok() {
        assert_eq!(validate_plan(&["A→C", "C→D"]), Ok(()));
    }

    #[test]
    fn validate_inapplicable_action_err() {
        let result = validate_plan(&["A→B", "C→D"]);
        assert_eq!(
            result,
            Err("Action C→D is not applicable in state \"B\"".to_string())
        );
    }

    #[test]
    fn validate_plan_not_reaching_goal_err() {
        assert!(validate_plan(&["A→B"]).is_err());
    }

    #[test]
    fn plan_cost_sums_action_costs() {
        let problem = diamond_graph();
        let plan: Plan = ["A→C", "C→D"].into_iter().collect();
        assert_eq!(plan_cost(&plan, &problem), Ok(6.));
    }
}
