//! Option kind (call or put).

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// European option kind.
///
/// A closed enum: the kind is chosen at construction and matched
/// exhaustively by every pricing formula.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
///
/// let kind: OptionKind = "Call".parse().unwrap();
/// assert_eq!(kind, OptionKind::Call);
/// assert_eq!(kind.sign(), 1.0);
///
/// assert!("straddle".parse::<OptionKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionKind {
    /// Payoff sign: +1 for calls, -1 for puts.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            OptionKind::Call => 1.0,
            OptionKind::Put => -1.0,
        }
    }

    /// Intrinsic value `max(sign·(underlying − strike), 0)`.
    #[inline]
    pub fn intrinsic(&self, underlying: f64, strike: f64) -> f64 {
        (self.sign() * (underlying - strike)).max(0.0)
    }
}

impl FromStr for OptionKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            _ => Err(PricingError::InvalidOptionKind(s.to_string())),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "call"),
            OptionKind::Put => write!(f, "put"),
        }
    }
}
