//! Closed-form versus simulation comparison.
//!
//! Maps a contract and model variant onto a simulation configuration:
//! the variant's reference price becomes the starting price, its cost of
//! carry becomes the drift, and its discount rate discounts the payoff.
//! Under that mapping the Monte Carlo estimate converges to the
//! closed-form price for every variant, including the discount-outside
//! Futures and Asay shapes.

use pricer_models::analytical::{self, ModelVariant};
use pricer_models::instruments::OptionContract;
use tracing::{debug, info};

use super::config::SimulationConfig;
use super::error::SimulationError;
use super::estimator::{estimate, MonteCarloEstimate};
use super::paths::simulate;

/// Closed-form price next to its Monte Carlo estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosedFormComparison {
    /// Model variant priced.
    pub variant: ModelVariant,
    /// Exact price.
    pub closed_form: f64,
    /// Simulation estimate.
    pub estimate: MonteCarloEstimate,
    /// Base seed of the simulation.
    pub seed: u64,
}

impl ClosedFormComparison {
    /// Estimate minus closed-form price.
    #[inline]
    pub fn error(&self) -> f64 {
        self.estimate.price - self.closed_form
    }

    /// Error measured in standard errors.
    #[inline]
    pub fn z_score(&self) -> f64 {
        self.error() / self.estimate.std_error
    }

    /// True if the closed-form price lies within `k` standard errors.
    #[inline]
    pub fn within(&self, k: f64) -> bool {
        self.estimate.contains(self.closed_form, k)
    }
}

/// Builds the simulation configuration that reproduces `variant`'s
/// closed-form price in expectation.
///
/// # Errors
///
/// - `Pricing` if the contract is invalid for the variant
/// - `Config` if the path or step count is out of range
pub fn simulation_config_for(
    contract: &OptionContract,
    variant: ModelVariant,
    n_paths: usize,
    n_steps: usize,
    seed: Option<u64>,
) -> Result<SimulationConfig, SimulationError> {
    analytical::validate_contract(contract)?;
    let carry = variant.carry(contract)?;

    let config = SimulationConfig::builder()
        .n_paths(n_paths)
        .n_steps(n_steps)
        .spot(carry.reference_price)
        .rate(carry.discount_rate)
        .drift(carry.cost_of_carry)
        .volatility(contract.volatility)
        .maturity(contract.maturity)
        .maybe_seed(seed)
        .build()?;
    Ok(config)
}

/// Prices `contract` both ways and reports the gap.
///
/// # Errors
///
/// See [`simulation_config_for`].
///
/// # Examples
///
/// ```rust
/// use pricer_models::analytical::ModelVariant;
/// use pricer_models::instruments::OptionContract;
/// use pricer_pricing::mc::compare_with_closed_form;
///
/// let call = OptionContract::call(100.0, 1.0, 0.2)
///     .with_spot(100.0)
///     .with_rate(0.05);
///
/// let cmp = compare_with_closed_form(&call, ModelVariant::Spot, 50_000, 1, Some(7)).unwrap();
/// assert!(cmp.within(4.0));
/// ```
pub fn compare_with_closed_form(
    contract: &OptionContract,
    variant: ModelVariant,
    n_paths: usize,
    n_steps: usize,
    seed: Option<u64>,
) -> Result<ClosedFormComparison, SimulationError> {
    let closed_form = analytical::price(contract, variant)?;
    let config = simulation_config_for(contract, variant, n_paths, n_steps, seed)?;

    let summary = simulate(&config);
    let estimate = estimate(
        contract.kind,
        &summary.terminal_prices,
        contract.strike,
        config.rate(),
        config.maturity(),
    )?;

    let comparison = ClosedFormComparison {
        variant,
        closed_form,
        estimate,
        seed: summary.seed,
    };

    debug!(
        %variant,
        kind = %contract.kind,
        closed_form,
        estimate = estimate.price,
        std_error = estimate.std_error,
        "closed-form comparison"
    );
    if !comparison.within(4.0) {
        info!(
            %variant,
            z_score = comparison.z_score(),
            seed = summary.seed,
            "estimate more than 4 standard errors from closed form"
        );
    }

    Ok(comparison)
}
