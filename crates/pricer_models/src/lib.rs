//! # Pricer Models (L2: Business Logic)
//!
//! Option contracts and the closed-form Black-Scholes model family.
//!
//! This crate provides:
//! - The [`OptionContract`](instruments::OptionContract) value type
//! - The generalised cost-of-carry formula and its six named specialisations
//!   (spot, dividend, futures, Asay, currency, generalised)
//!
//! ## Usage
//!
//! ```rust
//! use pricer_models::analytical::{price, ModelVariant};
//! use pricer_models::instruments::OptionContract;
//!
//! let call = OptionContract::call(65.0, 0.25, 0.30)
//!     .with_spot(60.0)
//!     .with_rate(0.08);
//!
//! let value = price(&call, ModelVariant::Spot).unwrap();
//! assert!((value - 2.1334).abs() < 1e-4);
//! ```
//!
//! ## Design Principles
//!
//! - **Enum-based variants** for static dispatch
//! - **Value types** passed by reference, never mutated
//! - **Consuming setters** for ergonomic contract construction

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
