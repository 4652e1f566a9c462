//! One-shot simulation runs.
//!
//! A run is generate → bargain → aggregate → evaluate, summarized by a
//! [`SimulationReport`]. Nothing is persisted or shared across runs.

use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::aggregate::optimal_result;
use crate::bargain::sequential_bargaining;
use crate::budget::{Budget, BudgetSet};
use crate::config::SimulationConfig;
use crate::distortion::distortion;
use crate::error::BargainResult;
use crate::generate::generate_budget_set;

/// Unique identifier for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(uuid::Uuid);

impl RunId {
    /// Creates a new random run ID.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything one simulation run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Identifier of this run.
    pub run_id: RunId,

    /// When the run completed.
    pub generated_at: DateTime<Utc>,

    /// The configuration the run used.
    pub config: SimulationConfig,

    /// The generated agent budgets, in generation order.
    pub budgets: BudgetSet,

    /// The consensus reached after `config.num_iters` bargaining rounds.
    pub outcome: Budget,

    /// The coordinate-wise median of the budget set.
    pub optimum: Budget,

    /// Social cost of the outcome divided by social cost of the optimum.
    pub distortion: f64,
}

/// Runs one complete simulation with the given configuration.
///
/// # Errors
///
/// Returns the configuration's validation error if it is invalid, and any
/// generation or distortion error the run surfaces.
pub fn run_simulation<R: Rng>(
    config: &SimulationConfig,
    rng: &mut R,
) -> BargainResult<SimulationReport> {
    config.validate()?;

    let budgets = generate_budget_set(config.norm, config.dimension, config.num_agents, rng)?;
    let outcome = sequential_bargaining(&budgets, config.num_iters, rng)?;
    let optimum = optimal_result(&budgets);
    let ratio = distortion(&outcome, &optimum, &budgets)?;

    Ok(SimulationReport {
        run_id: RunId::new(),
        generated_at: Utc::now(),
        config: *config,
        budgets,
        outcome,
        optimum,
        distortion: ratio,
    })
}
