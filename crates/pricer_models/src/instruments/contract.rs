//! European option contract.
//!
//! [`OptionContract`] is the sole input to closed-form pricing. It carries
//! every field any model variant may read; each variant documents which
//! fields it consumes (see [`ModelVariant`](crate::analytical::ModelVariant)).

use pricer_core::types::OptionKind;

/// Immutable European option contract.
///
/// Exactly one of `spot` and `forward` is meaningful for a given model
/// variant: spot-based variants read `spot`, the futures and Asay variants
/// read `forward`.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
/// use pricer_models::instruments::OptionContract;
///
/// let contract = OptionContract::call(65.0, 0.25, 0.30)
///     .with_spot(60.0)
///     .with_rate(0.08);
///
/// assert_eq!(contract.kind, OptionKind::Call);
/// assert_eq!(contract.spot, Some(60.0));
/// assert_eq!(contract.forward, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    /// Call or put.
    pub kind: OptionKind,
    /// Spot price of the underlying (S).
    pub spot: Option<f64>,
    /// Forward or futures price of the underlying (F).
    pub forward: Option<f64>,
    /// Strike price (X).
    pub strike: f64,
    /// Time to expiry in years (T).
    pub maturity: f64,
    /// Continuously compounded domestic risk-free rate (r). May be zero or negative.
    pub risk_free_rate: f64,
    /// Continuously compounded foreign rate (r_f), currency options only.
    pub foreign_rate: Option<f64>,
    /// Continuous dividend yield (q).
    pub dividend_yield: Option<f64>,
    /// Annualised volatility (σ).
    pub volatility: f64,
}

impl OptionContract {
    /// Creates a contract with no underlying price and zero rates.
    ///
    /// # Arguments
    /// * `kind` - Call or put
    /// * `strike` - Strike price
    /// * `maturity` - Time to expiry in years
    /// * `volatility` - Annualised volatility
    pub fn new(kind: OptionKind, strike: f64, maturity: f64, volatility: f64) -> Self {
        Self {
            kind,
            spot: None,
            forward: None,
            strike,
            maturity,
            risk_free_rate: 0.0,
            foreign_rate: None,
            dividend_yield: None,
            volatility,
        }
    }

    /// Creates a call contract. See [`OptionContract::new`].
    #[inline]
    pub fn call(strike: f64, maturity: f64, volatility: f64) -> Self {
        Self::new(OptionKind::Call, strike, maturity, volatility)
    }

    /// Creates a put contract. See [`OptionContract::new`].
    #[inline]
    pub fn put(strike: f64, maturity: f64, volatility: f64) -> Self {
        Self::new(OptionKind::Put, strike, maturity, volatility)
    }

    /// Sets the spot price.
    #[inline]
    pub fn with_spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the forward (futures) price.
    #[inline]
    pub fn with_forward(mut self, forward: f64) -> Self {
        self.forward = Some(forward);
        self
    }

    /// Sets the domestic risk-free rate.
    #[inline]
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    /// Sets the foreign risk-free rate.
    #[inline]
    pub fn with_foreign_rate(mut self, rate: f64) -> Self {
        self.foreign_rate = Some(rate);
        self
    }

    /// Sets the continuous dividend yield.
    #[inline]
    pub fn with_dividend_yield(mut self, yield_: f64) -> Self {
        self.dividend_yield = Some(yield_);
        self
    }

    /// Replaces the volatility.
    #[inline]
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    /// Replaces the maturity.
    #[inline]
    pub fn with_maturity(mut self, maturity: f64) -> Self {
        self.maturity = maturity;
        self
    }

    /// Replaces the option kind.
    #[inline]
    pub fn with_kind(mut self, kind: OptionKind) -> Self {
        self.kind = kind;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let contract = OptionContract::put(100.0, 1.0, 0.2);
        assert_eq!(contract.kind, OptionKind::Put);
        assert_eq!(contract.spot, None);
        assert_eq!(contract.forward, None);
        assert_eq!(contract.risk_free_rate, 0.0);
        assert_eq!(contract.foreign_rate, None);
        assert_eq!(contract.dividend_yield, None);
    }

    #[test]
    fn test_setters_return_modified_copy() {
        let base = OptionContract::call(100.0, 1.0, 0.2).with_spot(100.0);
        let bumped = base.with_volatility(0.25).with_maturity(2.0);

        assert_eq!(base.volatility, 0.2);
        assert_eq!(bumped.volatility, 0.25);
        assert_eq!(bumped.maturity, 2.0);
        assert_eq!(bumped.spot, Some(100.0));
    }

    #[test]
    fn test_with_kind() {
        let call = OptionContract::call(100.0, 1.0, 0.2);
        assert_eq!(call.with_kind(OptionKind::Put).kind, OptionKind::Put);
    }
}
