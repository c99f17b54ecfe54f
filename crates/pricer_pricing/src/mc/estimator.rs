//! Discounted payoff estimation from simulated terminal prices.
//!
//! The estimators expect terminal prices simulated under a risk-neutral
//! drift (see [`SimulationConfigBuilder::risk_neutral`]) and discount the
//! sample mean exactly once by `exp(−r·T)`.
//!
//! [`SimulationConfigBuilder::risk_neutral`]: super::SimulationConfigBuilder::risk_neutral

use pricer_core::types::OptionKind;

use super::error::SimulationError;

/// Monte Carlo price estimate with its standard error.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonteCarloEstimate {
    /// Discounted sample mean of the payoff.
    pub price: f64,
    /// Discounted sample standard deviation divided by √n.
    /// Infinite for a single-path sample.
    pub std_error: f64,
    /// Number of terminal prices used.
    pub n_paths: usize,
}

impl MonteCarloEstimate {
    /// Returns `(price − z·SE, price + z·SE)`.
    #[inline]
    pub fn confidence_interval(&self, z: f64) -> (f64, f64) {
        let half = z * self.std_error;
        (self.price - half, self.price + half)
    }

    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// True if `value` lies within `k` standard errors of the estimate.
    #[inline]
    pub fn contains(&self, value: f64, k: f64) -> bool {
        (self.price - value).abs() <= k * self.std_error
    }
}

/// Estimates a European payoff of either kind.
///
/// # Errors
///
/// - `EmptySample` if `terminal_prices` is empty
/// - `InvalidParameter` for a negative or non-finite strike, a non-finite
///   rate, or a negative or non-finite maturity
pub fn estimate(
    kind: OptionKind,
    terminal_prices: &[f64],
    strike: f64,
    rate: f64,
    maturity: f64,
) -> Result<MonteCarloEstimate, SimulationError> {
    if terminal_prices.is_empty() {
        return Err(SimulationError::EmptySample);
    }
    if !strike.is_finite() || strike < 0.0 {
        return Err(invalid("strike", strike));
    }
    if !rate.is_finite() {
        return Err(invalid("rate", rate));
    }
    if !maturity.is_finite() || maturity < 0.0 {
        return Err(invalid("maturity", maturity));
    }

    let n = terminal_prices.len();
    let n_f = n as f64;

    let mean = terminal_prices
        .iter()
        .map(|&s| kind.intrinsic(s, strike))
        .sum::<f64>()
        / n_f;

    // Second pass keeps the variance stable for deep in-the-money payoffs
    let std_error = if n > 1 {
        let sum_sq = terminal_prices
            .iter()
            .map(|&s| {
                let d = kind.intrinsic(s, strike) - mean;
                d * d
            })
            .sum::<f64>();
        (sum_sq / (n_f - 1.0)).sqrt() / n_f.sqrt()
    } else {
        f64::INFINITY
    };

    let discount = (-rate * maturity).exp();
    Ok(MonteCarloEstimate {
        price: mean * discount,
        std_error: std_error * discount,
        n_paths: n,
    })
}

/// Estimates the discounted expected call payoff `e^(−rT)·E[max(S_T − K, 0)]`.
///
/// # Errors
///
/// See [`estimate`].
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::estimate_call;
///
/// let est = estimate_call(&[90.0, 110.0, 120.0], 100.0, 0.0, 1.0).unwrap();
/// assert!((est.price - 10.0).abs() < 1e-12);
/// assert_eq!(est.n_paths, 3);
/// ```
pub fn estimate_call(
    terminal_prices: &[f64],
    strike: f64,
    rate: f64,
    maturity: f64,
) -> Result<MonteCarloEstimate, SimulationError> {
    estimate(OptionKind::Call, terminal_prices, strike, rate, maturity)
}

/// Estimates the discounted expected put payoff `e^(−rT)·E[max(K − S_T, 0)]`.
///
/// # Errors
///
/// See [`estimate`].
pub fn estimate_put(
    terminal_prices: &[f64],
    strike: f64,
    rate: f64,
    maturity: f64,
) -> Result<MonteCarloEstimate, SimulationError> {
    estimate(OptionKind::Put, terminal_prices, strike, rate, maturity)
}

/// Returns only the price from [`estimate_call`].
///
/// # Errors
///
/// See [`estimate`].
pub fn estimate_call_price(
    terminal_prices: &[f64],
    strike: f64,
    rate: f64,
    maturity: f64,
) -> Result<f64, SimulationError> {
    estimate_call(terminal_prices, strike, rate, maturity).map(|est| est.price)
}

fn invalid(name: &'static str, value: f64) -> SimulationError {
    SimulationError::InvalidParameter {
        name,
        value: value.to_string(),
    }
}
