//! CLI error types

use pricer_core::types::PricingError;
use pricer_pricing::mc::SimulationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `quantbs` commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Output error: {0:#}")]
    Output(#[from] anyhow::Error),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
