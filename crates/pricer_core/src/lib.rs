//! # pricer_core: Foundation Types for Closed-Form Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - The closed [`OptionKind`](types::OptionKind) enum (`types::option`)
//! - The [`PricingError`](types::PricingError) taxonomy (`types::error`)
//! - Standard normal CDF/PDF accurate to double precision (`math::distributions`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - statrs: Complementary error function
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::norm_cdf;
//! use pricer_core::types::{OptionKind, PricingError};
//!
//! let kind: OptionKind = "put".parse().unwrap();
//! assert_eq!(kind, OptionKind::Put);
//!
//! let err = "forward".parse::<OptionKind>().unwrap_err();
//! assert!(matches!(err, PricingError::InvalidOptionKind(_)));
//!
//! assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionKind`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
