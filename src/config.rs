//! Simulation run configuration.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::generate::NormKind;

/// Parameters that bound one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of resource dimensions per budget.
    pub dimension: usize,

    /// Number of agent budgets to generate. Conventionally odd, so the
    /// coordinate-wise median over the whole set is unambiguous.
    pub num_agents: usize,

    /// Number of bargaining iterations.
    pub num_iters: u64,

    /// Norm constraint the generated budgets satisfy.
    pub norm: NormKind,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dimension: 2,
            num_agents: 5,
            num_iters: 100,
            norm: NormKind::L1,
        }
    }
}

impl SimulationConfig {
    /// Validates the configuration.
    ///
    /// This must be called before a run begins; `run_simulation` does so.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDimension` for a zero dimension and
    /// `ValidationError::InvalidSampleSize` for fewer than two agents
    /// (pairwise sampling needs two distinct budgets).
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dimension == 0 {
            return Err(ValidationError::InvalidDimension { dimension: 0 });
        }
        if self.num_agents < 2 {
            return Err(ValidationError::InvalidSampleSize {
                actual: self.num_agents,
                required: 2,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_is_valid() {
        SimulationConfig::default().validate().unwrap();
    }

    #[test]
    fn test_config_rejects_zero_dimension() {
        let config = SimulationConfig {
            dimension: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            ValidationError::InvalidDimension { dimension: 0 }
        ));
    }

    #[test]
    fn test_config_rejects_small_sample() {
        for num_agents in [0, 1] {
            let config = SimulationConfig {
                num_agents,
                ..Default::default()
            };
            assert!(matches!(
                config.validate().unwrap_err(),
                ValidationError::InvalidSampleSize { required: 2, .. }
            ));
        }
    }

    #[test]
    fn test_config_zero_iterations_is_valid() {
        let config = SimulationConfig {
            num_iters: 0,
            ..Default::default()
        };
        config.validate().unwrap();
    }
}
