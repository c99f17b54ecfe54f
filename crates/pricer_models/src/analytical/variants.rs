//! Named Black-Scholes model variants as cost-of-carry specialisations.
//!
//! | Variant | b | Reference price | Discount rate | Shape |
//! |---|---|---|---|---|
//! | Spot (Black-Scholes 1973) | r | spot | r | carry-adjusted |
//! | Dividend (Merton 1973) | r − q | spot | r | carry-adjusted |
//! | Futures (Black 1976) | 0 | forward | r | discounted forward |
//! | Asay (1982) | 0 | forward | 0 | discounted forward |
//! | Currency (Garman-Kohlhagen 1983) | r − r_f | spot | r | carry-adjusted |
//! | Generalized | r − q | spot | r | carry-adjusted |

use std::fmt;
use std::str::FromStr;

use pricer_core::types::{OptionKind, PricingError};

use super::generalized::{discounted_forward_price, generalized_black_scholes, FormulaShape};
use crate::instruments::OptionContract;

/// Closed-form model variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ModelVariant {
    /// Black-Scholes on a non-dividend-paying spot, b = r.
    Spot,
    /// Merton continuous-dividend model, b = r − q.
    Dividend,
    /// Black-76 option on a futures price, b = 0.
    Futures,
    /// Asay option on a margined futures price, b = 0, no discounting.
    Asay,
    /// Garman-Kohlhagen currency option, b = r − r_f.
    Currency,
    /// Generalised cost-of-carry form, b = r − q (q defaults to 0).
    Generalized,
}

impl ModelVariant {
    /// All variants in declaration order.
    pub const ALL: [ModelVariant; 6] = [
        ModelVariant::Spot,
        ModelVariant::Dividend,
        ModelVariant::Futures,
        ModelVariant::Asay,
        ModelVariant::Currency,
        ModelVariant::Generalized,
    ];

    /// Short lowercase name, accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            ModelVariant::Spot => "spot",
            ModelVariant::Dividend => "dividend",
            ModelVariant::Futures => "futures",
            ModelVariant::Asay => "asay",
            ModelVariant::Currency => "currency",
            ModelVariant::Generalized => "generalized",
        }
    }

    /// Formula shape the variant prices with.
    #[inline]
    pub fn shape(&self) -> FormulaShape {
        match self {
            ModelVariant::Futures | ModelVariant::Asay => FormulaShape::DiscountedForward,
            _ => FormulaShape::CarryAdjusted,
        }
    }

    /// Maps a contract to the variant's carry parameters.
    ///
    /// Checks that the fields the variant reads are present, finite and,
    /// for the reference price, strictly positive.
    ///
    /// # Errors
    /// - `InvalidModelVariant` if a required field is missing
    /// - `NonPositivePrice` if the reference price is ≤ 0
    /// - `NonFiniteInput` if a required field is NaN or infinite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::{FormulaShape, ModelVariant};
    /// use pricer_models::instruments::OptionContract;
    ///
    /// let contract = OptionContract::call(1.60, 0.5, 0.12)
    ///     .with_spot(1.56)
    ///     .with_rate(0.06)
    ///     .with_foreign_rate(0.08);
    ///
    /// let carry = ModelVariant::Currency.carry(&contract).unwrap();
    /// assert!((carry.cost_of_carry - (-0.02)).abs() < 1e-15);
    /// assert_eq!(carry.discount_rate, 0.06);
    /// assert_eq!(carry.shape, FormulaShape::CarryAdjusted);
    /// ```
    pub fn carry(&self, contract: &OptionContract) -> Result<CarryParams, PricingError> {
        let r = contract.risk_free_rate;

        let (reference_price, cost_of_carry, discount_rate) = match self {
            ModelVariant::Spot => (self.require_spot(contract)?, r, r),
            ModelVariant::Dividend => {
                let q = self.require(contract.dividend_yield, "dividend yield is required")?;
                (self.require_spot(contract)?, r - finite("dividend yield", q)?, r)
            }
            ModelVariant::Futures => (self.require_forward(contract)?, 0.0, r),
            ModelVariant::Asay => (self.require_forward(contract)?, 0.0, 0.0),
            ModelVariant::Currency => {
                let rf = self.require(contract.foreign_rate, "foreign rate is required")?;
                (self.require_spot(contract)?, r - finite("foreign rate", rf)?, r)
            }
            ModelVariant::Generalized => {
                let q = finite("dividend yield", contract.dividend_yield.unwrap_or(0.0))?;
                (self.require_spot(contract)?, r - q, r)
            }
        };

        Ok(CarryParams {
            reference_price,
            cost_of_carry,
            discount_rate,
            shape: self.shape(),
        })
    }

    fn require(&self, value: Option<f64>, missing: &'static str) -> Result<f64, PricingError> {
        value.ok_or_else(|| PricingError::InvalidModelVariant {
            variant: self.name().to_string(),
            missing,
        })
    }

    fn require_spot(&self, contract: &OptionContract) -> Result<f64, PricingError> {
        let spot = self.require(contract.spot, "spot price is required")?;
        positive_price("spot", spot)
    }

    fn require_forward(&self, contract: &OptionContract) -> Result<f64, PricingError> {
        let forward = self.require(contract.forward, "forward price is required")?;
        positive_price("forward", forward)
    }
}

impl FromStr for ModelVariant {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spot" | "black-scholes" | "bs" => Ok(ModelVariant::Spot),
            "dividend" | "merton" => Ok(ModelVariant::Dividend),
            "futures" | "black76" | "black-76" => Ok(ModelVariant::Futures),
            "asay" => Ok(ModelVariant::Asay),
            "currency" | "fx" | "garman-kohlhagen" | "gk" => Ok(ModelVariant::Currency),
            "generalized" | "generalised" | "gbs" => Ok(ModelVariant::Generalized),
            _ => Err(PricingError::InvalidModelVariant {
                variant: s.to_string(),
                missing: "unknown variant name",
            }),
        }
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-variant inputs to a formula shape.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarryParams {
    /// Price substituted for S: spot, or forward for futures variants.
    pub reference_price: f64,
    /// Cost of carry (b).
    pub cost_of_carry: f64,
    /// Rate used in the discount factor e^(−rT).
    pub discount_rate: f64,
    /// Formula shape.
    pub shape: FormulaShape,
}

impl CarryParams {
    /// Evaluates the formula shape. Inputs are assumed validated.
    #[inline]
    pub fn evaluate(
        &self,
        kind: OptionKind,
        strike: f64,
        maturity: f64,
        volatility: f64,
    ) -> f64 {
        match self.shape {
            FormulaShape::CarryAdjusted => generalized_black_scholes(
                kind,
                self.reference_price,
                strike,
                maturity,
                self.discount_rate,
                self.cost_of_carry,
                volatility,
            ),
            FormulaShape::DiscountedForward => discounted_forward_price(
                kind,
                self.reference_price,
                strike,
                maturity,
                self.discount_rate,
                volatility,
            ),
        }
    }

    /// Discounted forward minus discounted strike: the `C − P` parity value.
    #[inline]
    pub fn parity_value(&self, strike: f64, maturity: f64) -> f64 {
        let df = (-self.discount_rate * maturity).exp();
        match self.shape {
            FormulaShape::CarryAdjusted => {
                self.reference_price * ((self.cost_of_carry - self.discount_rate) * maturity).exp()
                    - strike * df
            }
            FormulaShape::DiscountedForward => df * (self.reference_price - strike),
        }
    }
}

/// Prices a European option under the given model variant.
///
/// # Errors
/// - `NonPositiveVolatility` / `NonPositiveMaturity` / `NonPositivePrice`
///   for values ≤ 0
/// - `NonFiniteInput` for NaN or infinite inputs
/// - `InvalidModelVariant` if the contract lacks a field the variant needs
/// - `NumericalInstability` if the formula does not produce a finite price
///
/// # Examples
/// ```
/// use pricer_models::analytical::{price, ModelVariant};
/// use pricer_models::instruments::OptionContract;
///
/// let put = OptionContract::put(95.0, 0.5, 0.20)
///     .with_spot(100.0)
///     .with_rate(0.10)
///     .with_dividend_yield(0.05);
///
/// let value = price(&put, ModelVariant::Dividend).unwrap();
/// assert!((value - 2.4648).abs() < 1e-4);
///
/// // σ = 0 is a typed failure, not NaN
/// assert!(price(&put.with_volatility(0.0), ModelVariant::Dividend).is_err());
/// ```
pub fn price(contract: &OptionContract, variant: ModelVariant) -> Result<f64, PricingError> {
    validate_contract(contract)?;
    let carry = variant.carry(contract)?;

    let value = carry.evaluate(
        contract.kind,
        contract.strike,
        contract.maturity,
        contract.volatility,
    );

    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::NumericalInstability(format!(
            "{} {} price evaluated to {}",
            variant, contract.kind, value
        )))
    }
}

/// Returns the cost of carry b the variant applies to the contract.
///
/// # Errors
/// Same as [`ModelVariant::carry`].
pub fn cost_of_carry(contract: &OptionContract, variant: ModelVariant) -> Result<f64, PricingError> {
    variant.carry(contract).map(|carry| carry.cost_of_carry)
}

/// Checks the variant-independent preconditions.
///
/// # Errors
/// See [`price`].
pub fn validate_contract(contract: &OptionContract) -> Result<(), PricingError> {
    let volatility = finite("volatility", contract.volatility)?;
    if volatility <= 0.0 {
        return Err(PricingError::NonPositiveVolatility { volatility });
    }

    let maturity = finite("maturity", contract.maturity)?;
    if maturity <= 0.0 {
        return Err(PricingError::NonPositiveMaturity { maturity });
    }

    positive_price("strike", contract.strike)?;
    finite("risk-free rate", contract.risk_free_rate)?;
    Ok(())
}

fn finite(field: &'static str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::NonFiniteInput { field, value })
    }
}

fn positive_price(field: &'static str, value: f64) -> Result<f64, PricingError> {
    let value = finite(field, value)?;
    if value <= 0.0 {
        return Err(PricingError::NonPositivePrice { field, value });
    }
    Ok(value)
}
