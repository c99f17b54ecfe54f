//! Core financial types.
//!
//! This module provides:
//! - `option`: The closed [`OptionKind`] enum
//! - `error`: Structured [`PricingError`] taxonomy
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level.

pub mod error;
pub mod option;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use option::OptionKind;
