//! Error types for Monte Carlo simulation.
//!
//! This module defines structured error types for configuration validation
//! and runtime failures in the simulation engine.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Configuration error for path simulation.
///
/// These errors occur in [`SimulationConfigBuilder::build`](super::SimulationConfigBuilder::build)
/// when invalid parameters are provided.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Step count outside valid range [1, 10_000].
    #[error("Invalid step count {0}: must be in range [1, 10_000]")]
    InvalidStepCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Runtime error from simulation or estimation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SimulationError {
    /// The simulation configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The closed-form reference price could not be computed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// A cancellation token was triggered before all batches ran.
    #[error("Simulation cancelled after {completed_batches} of {total_batches} batches")]
    Cancelled {
        /// Batches that finished before cancellation was observed.
        completed_batches: usize,
        /// Batches the simulation was split into.
        total_batches: usize,
    },

    /// An estimator received no terminal prices.
    #[error("Cannot estimate a price from an empty sample")]
    EmptySample,

    /// An estimator argument is out of range.
    #[error("Invalid estimator argument '{name}': {value}")]
    InvalidParameter {
        /// Argument name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}
