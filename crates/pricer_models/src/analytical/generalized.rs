//! Generalised Black-Scholes formula shapes.
//!
//! Every named model variant prices through one of two shapes:
//!
//! **Carry-adjusted** (spot-based variants):
//! ```text
//! Call = S·e^((b−r)T)·N(d₁) − X·e^(−rT)·N(d₂)
//! Put  = X·e^(−rT)·N(−d₂) − S·e^((b−r)T)·N(−d₁)
//! ```
//!
//! **Discounted forward** (futures and Asay variants):
//! ```text
//! Call = e^(−rT)·(F·N(d₁) − X·N(d₂))
//! Put  = e^(−rT)·(X·N(−d₂) − F·N(−d₁))
//! ```
//!
//! Where:
//! - d₁ = (ln(S/X) + (b + σ²/2)T) / (σ√T)
//! - d₂ = d₁ − σ√T
//!
//! The discounted-forward shape uses b = 0 inside d₁ and discounts the whole
//! bracket; with r = 0 it is the Asay margined-futures formula.
//!
//! The functions here do not validate their inputs. Use
//! [`price`](super::variants::price) for checked pricing.

use pricer_core::math::norm_cdf;
use pricer_core::types::OptionKind;

/// Which of the two formula shapes a variant prices with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormulaShape {
    /// `S·e^((b−r)T)·N(d₁) − X·e^(−rT)·N(d₂)`
    CarryAdjusted,
    /// `e^(−rT)·(F·N(d₁) − X·N(d₂))`
    DiscountedForward,
}

/// Computes the standardised moneyness terms (d₁, d₂).
///
/// # Arguments
/// * `s` - Reference price (spot or forward)
/// * `x` - Strike price
/// * `t` - Time to expiry in years
/// * `b` - Cost of carry
/// * `sigma` - Volatility
///
/// # Examples
/// ```
/// use pricer_models::analytical::d1_d2;
///
/// let (d1, d2) = d1_d2(100.0, 100.0, 1.0, 0.0, 0.2);
/// assert!((d1 - 0.1).abs() < 1e-12);
/// assert!((d2 + 0.1).abs() < 1e-12);
/// ```
#[inline]
pub fn d1_d2(s: f64, x: f64, t: f64, b: f64, sigma: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / x).ln() + (b + 0.5 * sigma * sigma) * t) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Generalised Black-Scholes price (carry-adjusted shape).
///
/// # Arguments
/// * `kind` - Call or put
/// * `s` - Spot price
/// * `x` - Strike price
/// * `t` - Time to expiry in years
/// * `r` - Risk-free rate used for discounting
/// * `b` - Cost of carry
/// * `sigma` - Volatility
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
/// use pricer_models::analytical::generalized_black_scholes;
///
/// // b = r: plain Black-Scholes
/// let call = generalized_black_scholes(OptionKind::Call, 60.0, 65.0, 0.25, 0.08, 0.08, 0.30);
/// assert!((call - 2.1334).abs() < 1e-4);
/// ```
pub fn generalized_black_scholes(
    kind: OptionKind,
    s: f64,
    x: f64,
    t: f64,
    r: f64,
    b: f64,
    sigma: f64,
) -> f64 {
    let (d1, d2) = d1_d2(s, x, t, b, sigma);
    let carried_spot = s * ((b - r) * t).exp();
    let discounted_strike = x * (-r * t).exp();

    match kind {
        OptionKind::Call => carried_spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
        OptionKind::Put => discounted_strike * norm_cdf(-d2) - carried_spot * norm_cdf(-d1),
    }
}

/// Option on a forward or futures price (discounted-forward shape).
///
/// Pass `r = 0` for the Asay model of options on margined futures.
///
/// # Arguments
/// * `kind` - Call or put
/// * `f` - Forward or futures price
/// * `x` - Strike price
/// * `t` - Time to expiry in years
/// * `r` - Discount rate applied to the whole payoff
/// * `sigma` - Volatility of the forward
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
/// use pricer_models::analytical::discounted_forward_price;
///
/// let call = discounted_forward_price(OptionKind::Call, 19.0, 19.0, 0.75, 0.10, 0.28);
/// assert!((call - 1.7011).abs() < 1e-4);
/// ```
pub fn discounted_forward_price(
    kind: OptionKind,
    f: f64,
    x: f64,
    t: f64,
    r: f64,
    sigma: f64,
) -> f64 {
    let (d1, d2) = d1_d2(f, x, t, 0.0, sigma);
    let undiscounted = match kind {
        OptionKind::Call => f * norm_cdf(d1) - x * norm_cdf(d2),
        OptionKind::Put => x * norm_cdf(-d2) - f * norm_cdf(-d1),
    };
    (-r * t).exp() * undiscounted
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_d1_d2_spread_is_vol_sqrt_t() {
        let (d1, d2) = d1_d2(105.0, 100.0, 0.5, 0.03, 0.25);
        assert_abs_diff_eq!(d1 - d2, 0.25 * 0.5_f64.sqrt(), epsilon = 1e-14);
    }

    #[test]
    fn test_plain_black_scholes_reference() {
        // Hull: S=42, K=40, r=10%, σ=20%, T=0.5 → C=4.76, P=0.81
        let call = generalized_black_scholes(OptionKind::Call, 42.0, 40.0, 0.5, 0.1, 0.1, 0.2);
        let put = generalized_black_scholes(OptionKind::Put, 42.0, 40.0, 0.5, 0.1, 0.1, 0.2);
        assert_abs_diff_eq!(call, 4.7594, epsilon = 1e-4);
        assert_abs_diff_eq!(put, 0.8086, epsilon = 1e-4);
    }

    #[test]
    fn test_put_call_parity_carry_adjusted() {
        let (s, x, t, r, b, sigma) = (100.0, 95.0, 0.5, 0.1, 0.05, 0.2);
        let call = generalized_black_scholes(OptionKind::Call, s, x, t, r, b, sigma);
        let put = generalized_black_scholes(OptionKind::Put, s, x, t, r, b, sigma);
        let parity = s * ((b - r) * t).exp() - x * (-r * t).exp();
        assert_abs_diff_eq!(call - put, parity, epsilon = 1e-12);
    }

    #[test]
    fn test_put_call_parity_discounted_forward() {
        let (f, x, t, r, sigma) = (19.0, 20.0, 0.75, 0.1, 0.28);
        let call = discounted_forward_price(OptionKind::Call, f, x, t, r, sigma);
        let put = discounted_forward_price(OptionKind::Put, f, x, t, r, sigma);
        assert_abs_diff_eq!(call - put, (-r * t).exp() * (f - x), epsilon = 1e-12);
    }

    #[test]
    fn test_shapes_agree_at_zero_carry() {
        // b = 0 folds the same discount into both terms
        for kind in [OptionKind::Call, OptionKind::Put] {
            let carry = generalized_black_scholes(kind, 19.0, 19.0, 0.75, 0.1, 0.0, 0.28);
            let forward = discounted_forward_price(kind, 19.0, 19.0, 0.75, 0.1, 0.28);
            assert_abs_diff_eq!(carry, forward, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_asay_is_undiscounted_futures_price() {
        let (f, x, t, r, sigma) = (100.0, 105.0, 1.5, 0.07, 0.35);
        let futures = discounted_forward_price(OptionKind::Call, f, x, t, r, sigma);
        let asay = discounted_forward_price(OptionKind::Call, f, x, t, 0.0, sigma);
        assert_abs_diff_eq!(asay, futures * (r * t).exp(), epsilon = 1e-10);
    }

    #[test]
    fn test_deep_itm_call_approaches_forward_intrinsic() {
        let call = generalized_black_scholes(OptionKind::Call, 200.0, 50.0, 1.0, 0.05, 0.05, 0.1);
        let intrinsic = 200.0 - 50.0 * (-0.05_f64).exp();
        assert_abs_diff_eq!(call, intrinsic, epsilon = 1e-10);
    }
}
