//! Random budget generation under a norm constraint.
//!
//! Two variants sit behind one entry point, selected by [`NormKind`]:
//!
//! - **L1**: nonnegative coordinates summing to 1, uniform over the simplex.
//! - **L2**: unit Euclidean length, direction uniform over the sphere;
//!   coordinates may be negative.
//!
//! The asymmetry is deliberate: the L1 variant models nonnegative
//! allocations, the L2 variant mixed-sign ones.
//!
//! All sampling goes through a caller-supplied [`rand::Rng`], so a seeded
//! generator reproduces every draw.

use std::fmt;

use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use crate::budget::{Budget, BudgetSet};
use crate::error::{BargainResult, SimulationError, ValidationError};
use crate::geometry::l2_norm;

/// Which unit-norm constraint generated budgets satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormKind {
    /// Nonnegative coordinates summing to 1 (uniform on the simplex).
    L1,

    /// Unit Euclidean length, direction uniform on the sphere.
    L2,
}

impl Default for NormKind {
    fn default() -> Self {
        Self::L1
    }
}

impl fmt::Display for NormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::L1 => write!(f, "l1"),
            Self::L2 => write!(f, "l2"),
        }
    }
}

/// Draws one budget satisfying the `kind` norm constraint.
///
/// # Errors
///
/// Returns `ValidationError::InvalidDimension` if `dimension` is zero, and
/// `SimulationError::DegenerateVector` if the L2 variant samples an exactly
/// zero vector.
pub fn generate_budget<R: Rng>(
    kind: NormKind,
    dimension: usize,
    rng: &mut R,
) -> BargainResult<Budget> {
    if dimension == 0 {
        return Err(ValidationError::InvalidDimension { dimension }.into());
    }

    let coordinates = match kind {
        NormKind::L1 => l1_simplex(dimension, rng),
        NormKind::L2 => l2_sphere(dimension, rng)?,
    };

    Ok(Budget::new(coordinates)?)
}

/// Draws `count` budgets of the given dimension into a [`BudgetSet`].
///
/// # Errors
///
/// Returns `ValidationError::InvalidSampleSize` if `count` is zero, plus
/// anything [`generate_budget`] can return.
pub fn generate_budget_set<R: Rng>(
    kind: NormKind,
    dimension: usize,
    count: usize,
    rng: &mut R,
) -> BargainResult<BudgetSet> {
    if count == 0 {
        return Err(ValidationError::InvalidSampleSize {
            actual: 0,
            required: 1,
        }
        .into());
    }

    let mut budgets = Vec::with_capacity(count);
    for _ in 0..count {
        budgets.push(generate_budget(kind, dimension, rng)?);
    }

    Ok(BudgetSet::new(budgets)?)
}

/// `d - 1` uniform breakpoints split the unit interval into `d` gaps; the
/// gaps are the coordinates. Nonnegative, summing to 1.
fn l1_simplex<R: Rng>(dimension: usize, rng: &mut R) -> Vec<f64> {
    let mut breakpoints: Vec<f64> = (0..dimension - 1).map(|_| rng.gen::<f64>()).collect();
    breakpoints.sort_by(f64::total_cmp);

    let mut coordinates = Vec::with_capacity(dimension);
    let mut previous = 0.0;
    for &point in &breakpoints {
        coordinates.push(point - previous);
        previous = point;
    }
    coordinates.push(1.0 - previous);
    coordinates
}

/// `d` standard-normal draws rescaled to unit Euclidean length, giving a
/// direction uniform over the sphere.
fn l2_sphere<R: Rng>(dimension: usize, rng: &mut R) -> Result<Vec<f64>, SimulationError> {
    let raw: Vec<f64> = (0..dimension)
        .map(|_| rng.sample::<f64, _>(StandardNormal))
        .collect();

    let magnitude = l2_norm(&raw);
    if magnitude == 0.0 {
        return Err(SimulationError::DegenerateVector { dimension });
    }

    Ok(raw.iter().map(|x| x / magnitude).collect())
}
