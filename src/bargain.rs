//! The sequential bargaining engine.
//!
//! Models pairwise sequential negotiation: at each step two randomly
//! selected agents meet the current consensus candidate, and the trio
//! settles on the per-dimension median. The process is not guaranteed to
//! converge to the optimum; the distortion metric measures the gap.

use rand::Rng;

use crate::budget::{Budget, BudgetSet};
use crate::error::ValidationError;
use crate::geometry::median_of_three;

/// Minimum number of budgets pairwise sampling requires.
const MIN_SAMPLE_SIZE: usize = 2;

/// Runs `num_iters` rounds of pairwise-median bargaining over the set.
///
/// The candidate starts as a uniformly random member of the set. Each
/// round draws two distinct budgets from the full set (without replacement
/// within the round; the same pair may recur across rounds) and replaces
/// the candidate with the coordinate-wise median of the triple. With
/// `num_iters == 0` the initial draw is returned unchanged.
///
/// # Errors
///
/// Returns `ValidationError::InvalidSampleSize` if the set has fewer than
/// two members.
pub fn sequential_bargaining<R: Rng>(
    budgets: &BudgetSet,
    num_iters: u64,
    rng: &mut R,
) -> Result<Budget, ValidationError> {
    if budgets.len() < MIN_SAMPLE_SIZE {
        return Err(ValidationError::InvalidSampleSize {
            actual: budgets.len(),
            required: MIN_SAMPLE_SIZE,
        });
    }

    let members = budgets.as_slice();
    let mut candidate = members[rng.gen_range(0..members.len())].clone();

    for _ in 0..num_iters {
        let pair = rand::seq::index::sample(rng, members.len(), 2);
        let u = &members[pair.index(0)];
        let v = &members[pair.index(1)];

        let coordinates = (0..budgets.dimension())
            .map(|i| {
                median_of_three(
                    u.coordinates()[i],
                    v.coordinates()[i],
                    candidate.coordinates()[i],
                )
            })
            .collect();
        candidate = Budget::from_coordinates(coordinates);
    }

    Ok(candidate)
}
