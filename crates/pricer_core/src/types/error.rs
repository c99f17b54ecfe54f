//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Precondition failures from closed-form pricing
//!
//! Every failure is returned as a typed value. Pricing functions never
//! substitute a message or `NaN` for a numeric result.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Each variant names the precondition that failed, together with the
/// offending value where one exists.
///
/// # Variants
/// - `InvalidOptionKind`: Option kind string is neither call nor put
/// - `NonPositiveVolatility`: σ ≤ 0
/// - `NonPositiveMaturity`: T ≤ 0
/// - `NonPositivePrice`: Spot, forward or strike ≤ 0
/// - `InvalidModelVariant`: Variant requires a field the contract lacks
/// - `NonFiniteInput`: A rate or price is `NaN` or infinite
/// - `NumericalInstability`: Formula produced a non-finite value
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::NonPositiveVolatility { volatility: 0.0 };
/// assert_eq!(format!("{}", err), "Non-positive volatility: σ = 0");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// Option kind could not be recognised.
    #[error("Invalid option kind: '{0}' (expected call or put)")]
    InvalidOptionKind(String),

    /// Volatility is zero or negative.
    #[error("Non-positive volatility: σ = {volatility}")]
    NonPositiveVolatility {
        /// The rejected volatility
        volatility: f64,
    },

    /// Time to maturity is zero or negative.
    #[error("Non-positive maturity: T = {maturity}")]
    NonPositiveMaturity {
        /// The rejected maturity in years
        maturity: f64,
    },

    /// A price input (spot, forward or strike) is zero or negative.
    #[error("Non-positive {field}: {value}")]
    NonPositivePrice {
        /// Which price input was rejected
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// The model variant cannot be applied to the contract.
    #[error("Invalid model variant {variant}: {missing}")]
    InvalidModelVariant {
        /// Variant name as supplied or displayed
        variant: String,
        /// What is missing or unrecognised
        missing: &'static str,
    },

    /// An input is NaN or infinite.
    #[error("Non-finite {field}: {value}")]
    NonFiniteInput {
        /// Which input was rejected
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_option_kind_display() {
        let err = PricingError::InvalidOptionKind("straddle".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid option kind: 'straddle' (expected call or put)"
        );
    }

    #[test]
    fn test_non_positive_maturity_display() {
        let err = PricingError::NonPositiveMaturity { maturity: -0.5 };
        assert_eq!(format!("{}", err), "Non-positive maturity: T = -0.5");
    }

    #[test]
    fn test_non_positive_price_display() {
        let err = PricingError::NonPositivePrice {
            field: "strike",
            value: 0.0,
        };
        assert_eq!(format!("{}", err), "Non-positive strike: 0");
    }

    #[test]
    fn test_invalid_model_variant_display() {
        let err = PricingError::InvalidModelVariant {
            variant: "Currency".to_string(),
            missing: "foreign rate is required",
        };
        assert!(err.to_string().contains("Currency"));
        assert!(err.to_string().contains("foreign rate"));
    }

    #[test]
    fn test_non_finite_display() {
        let err = PricingError::NonFiniteInput {
            field: "risk-free rate",
            value: f64::NAN,
        };
        assert_eq!(format!("{}", err), "Non-finite risk-free rate: NaN");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::NonPositiveVolatility { volatility: -0.1 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::NonPositiveMaturity { maturity: 0.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
