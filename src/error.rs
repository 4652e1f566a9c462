//! Error types for the bargaining simulator.
//!
//! All errors are strongly typed using thiserror. Validation errors are
//! raised at API boundaries before any simulation work starts; simulation
//! errors are numerical degeneracies detected while a run is in progress.
//! Every error is terminal for the current run.

use thiserror::Error;

/// Validation errors that occur during input validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Dimension must be at least 1, got {dimension}")]
    InvalidDimension {
        dimension: usize,
    },

    #[error("Sample size {actual} is below the required minimum of {required}")]
    InvalidSampleSize {
        actual: usize,
        required: usize,
    },

    #[error("Vector dimensions differ: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
    },

    #[error("Budget set cannot be empty")]
    EmptyBudgetSet,
}

/// Numerical errors that occur while a simulation is running.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Sampled a zero-magnitude vector in dimension {dimension}; cannot normalize")]
    DegenerateVector {
        dimension: usize,
    },

    #[error("Optimum cost is zero; distortion is undefined")]
    DegenerateOptimum,
}

/// Top-level error type for the simulator.
///
/// This enum encompasses all possible errors that can occur
/// when running a simulation.
#[derive(Debug, Error)]
pub enum BargainError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),
}

impl BargainError {
    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a simulation error.
    #[must_use]
    pub const fn is_simulation(&self) -> bool {
        matches!(self, Self::Simulation(_))
    }
}

/// Result type alias for simulator operations.
pub type BargainResult<T> = Result<T, BargainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_dimension() {
        let err = ValidationError::InvalidDimension { dimension: 0 };
        let msg = format!("{err}");
        assert!(msg.contains("at least 1"));
        assert!(msg.contains('0'));
    }

    #[test]
    fn test_validation_error_sample_size() {
        let err = ValidationError::InvalidSampleSize {
            actual: 1,
            required: 2,
        };
        let msg = format!("{err}");
        assert!(msg.contains('1'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_validation_error_dimension_mismatch() {
        let err = ValidationError::DimensionMismatch {
            expected: 3,
            actual: 2,
        };
        let msg = format!("{err}");
        assert!(msg.contains("expected 3"));
        assert!(msg.contains("got 2"));
    }

    #[test]
    fn test_simulation_error_degenerate_vector() {
        let err = SimulationError::DegenerateVector { dimension: 4 };
        let msg = format!("{err}");
        assert!(msg.contains("zero-magnitude"));
        assert!(msg.contains('4'));
    }

    #[test]
    fn test_bargain_error_from_validation() {
        let err: BargainError = ValidationError::EmptyBudgetSet.into();
        assert!(err.is_validation());
        assert!(!err.is_simulation());
    }

    #[test]
    fn test_bargain_error_from_simulation() {
        let err: BargainError = SimulationError::DegenerateOptimum.into();
        assert!(err.is_simulation());
        assert!(!err.is_validation());
        let msg = format!("{err}");
        assert!(msg.contains("distortion is undefined"));
    }
}
