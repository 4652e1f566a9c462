//! Coordinate-wise median aggregation.

use crate::budget::{Budget, BudgetSet};
use crate::geometry::median;

/// The socially optimal aggregate: each coordinate is the median of that
/// coordinate across all budgets in the set.
///
/// Order-invariant, and with a single budget it returns that budget
/// unchanged.
#[must_use]
pub fn optimal_result(budgets: &BudgetSet) -> Budget {
    let dimension = budgets.dimension();
    let mut coordinates = Vec::with_capacity(dimension);
    let mut column = Vec::with_capacity(budgets.len());

    for i in 0..dimension {
        column.clear();
        column.extend(budgets.iter().map(|b| b.coordinates()[i]));
        coordinates.push(median(&column));
    }

    Budget::from_coordinates(coordinates)
}
