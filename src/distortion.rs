//! Distortion: bargaining cost relative to the optimal aggregate.

use crate::budget::{Budget, BudgetSet};
use crate::error::{BargainResult, SimulationError, ValidationError};
use crate::geometry::l1_distance;

/// Total social cost of adopting `reference`: the summed L1 distance from
/// every agent's budget to `reference`.
///
/// # Errors
///
/// Returns `ValidationError::DimensionMismatch` if `reference` and the set
/// disagree on dimension.
pub fn total_cost(reference: &Budget, budgets: &BudgetSet) -> Result<f64, ValidationError> {
    let mut cost = 0.0;
    for budget in budgets {
        cost += l1_distance(reference.coordinates(), budget.coordinates())?;
    }
    Ok(cost)
}

/// Ratio of the bargaining outcome's social cost to the optimum's social
/// cost. A value of 1.0 means the outcome ties the optimum; larger values
/// mean worse-than-optimal aggregation.
///
/// # Errors
///
/// Returns `SimulationError::DegenerateOptimum` when the optimum's cost is
/// zero (every budget identical to the optimum), which would otherwise
/// produce a NaN or infinite ratio.
pub fn distortion(outcome: &Budget, optimum: &Budget, budgets: &BudgetSet) -> BargainResult<f64> {
    let outcome_cost = total_cost(outcome, budgets)?;
    let optimum_cost = total_cost(optimum, budgets)?;

    if optimum_cost == 0.0 {
        return Err(SimulationError::DegenerateOptimum.into());
    }

    Ok(outcome_cost / optimum_cost)
}
