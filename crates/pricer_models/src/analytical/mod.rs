//! Closed-form European option pricing.
//!
//! This module provides the generalised Black-Scholes family:
//! - [`generalized`]: d₁/d₂ and the two formula shapes
//! - [`variants`]: The six named variants as cost-of-carry mappings, and [`price`]
//!
//! ## Design Principles
//!
//! - **One core formula**: variants differ only in (reference price, b, discount rate)
//! - **Two shapes**: carry-adjusted for spot-based variants, discounted forward
//!   for futures-based variants
//! - **Typed failures**: preconditions are checked before any logarithm or division

pub mod generalized;
pub mod variants;

// Re-export main types at module level
pub use generalized::{d1_d2, discounted_forward_price, generalized_black_scholes, FormulaShape};
pub use variants::{cost_of_carry, price, validate_contract, CarryParams, ModelVariant};
