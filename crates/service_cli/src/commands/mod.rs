//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Argument groups shared
//! between commands live here.

use clap::Args;
use pricer_core::types::OptionKind;
use pricer_models::instruments::OptionContract;

use crate::config::SimulationSettings;

pub mod check;
pub mod compare;
pub mod price;
pub mod simulate;

/// European option contract flags
#[derive(Debug, Clone, Args)]
pub struct ContractArgs {
    /// Option kind (call, put)
    #[arg(long, default_value = "call")]
    pub kind: OptionKind,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Time to expiry in years
    #[arg(long)]
    pub maturity: f64,

    /// Annualised volatility (0.2 = 20%)
    #[arg(long = "vol")]
    pub volatility: f64,

    /// Spot price of the underlying
    #[arg(long)]
    pub spot: Option<f64>,

    /// Forward or futures price
    #[arg(long)]
    pub forward: Option<f64>,

    /// Continuously compounded risk-free rate
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub rate: f64,

    /// Continuous dividend yield
    #[arg(long, allow_hyphen_values = true)]
    pub dividend_yield: Option<f64>,

    /// Foreign risk-free rate (currency options)
    #[arg(long, allow_hyphen_values = true)]
    pub foreign_rate: Option<f64>,
}

impl ContractArgs {
    /// Build the contract these flags describe
    pub fn to_contract(&self) -> OptionContract {
        OptionContract {
            kind: self.kind,
            spot: self.spot,
            forward: self.forward,
            strike: self.strike,
            maturity: self.maturity,
            risk_free_rate: self.rate,
            foreign_rate: self.foreign_rate,
            dividend_yield: self.dividend_yield,
            volatility: self.volatility,
        }
    }
}

/// Monte Carlo overrides on top of the configuration file
#[derive(Debug, Clone, Default, Args)]
pub struct SimulationArgs {
    /// Number of Monte Carlo paths
    #[arg(short = 'n', long)]
    pub paths: Option<usize>,

    /// Time steps per path
    #[arg(long)]
    pub steps: Option<usize>,

    /// Base seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SimulationArgs {
    /// Flags take precedence over `settings`
    pub fn apply(&self, settings: SimulationSettings) -> SimulationSettings {
        SimulationSettings {
            paths: self.paths.unwrap_or(settings.paths),
            steps: self.steps.unwrap_or(settings.steps),
            seed: self.seed.or(settings.seed),
        }
    }
}
