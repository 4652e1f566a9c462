//! # seqbargain - Sequential Bargaining Simulator
//!
//! seqbargain simulates a sequential bargaining mechanism that aggregates
//! multiple agents' preferred resource-allocation budgets into a single
//! compromise budget, and measures how far that compromise is from the
//! socially optimal aggregate (the coordinate-wise median) as a distortion
//! ratio.
//!
//! ## Core Concepts
//!
//! - **Budget**: one agent's preferred allocation vector, normalized to unit L1 or L2 norm
//! - **Sequential bargaining**: iteratively replacing a consensus candidate with the coordinate-wise median of itself and two randomly drawn budgets
//! - **Optimum**: the coordinate-wise median of the whole budget set
//! - **Distortion**: ratio of the bargaining outcome's social cost to the optimum's
//!
//! ## Usage
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use seqbargain::{run_simulation, NormKind, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     dimension: 3,
//!     num_agents: 5,
//!     num_iters: 200,
//!     norm: NormKind::L1,
//! };
//! let mut rng = StdRng::seed_from_u64(7);
//! let report = run_simulation(&config, &mut rng).unwrap();
//! assert!(report.distortion >= 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Core types
pub mod budget;
pub mod error;
pub mod geometry;

// Simulation components
pub mod aggregate;
pub mod bargain;
pub mod config;
pub mod distortion;
pub mod generate;
pub mod run;

// Driver support
pub mod display;

// Re-export primary types at crate root for convenience
pub use aggregate::optimal_result;
pub use bargain::sequential_bargaining;
pub use budget::{Budget, BudgetSet};
pub use config::SimulationConfig;
pub use distortion::{distortion, total_cost};
pub use error::{BargainError, BargainResult, SimulationError, ValidationError};
pub use generate::{generate_budget, generate_budget_set, NormKind};
pub use geometry::{l1_distance, l2_norm, median, median_of_three};
pub use run::{run_simulation, RunId, SimulationReport};
