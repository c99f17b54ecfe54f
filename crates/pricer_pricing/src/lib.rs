//! # Pricer Pricing (Layer 3: Simulation Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing is the Monte Carlo engine of quantbs:
//! - Geometric Brownian motion path simulation, parallel over rayon
//! - Discounted payoff estimation with standard errors
//! - Side-by-side comparison against the closed-form prices of
//!   `pricer_models`
//!
//! ## Reproducibility
//!
//! Paths are simulated in fixed-size batches, each with its own generator
//! derived from the base seed and the batch index. A seeded run therefore
//! produces the same output on any number of threads. Unseeded runs draw a
//! seed from entropy and report it in [`mc::SimulationSummary`].
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::analytical::ModelVariant;
//! use pricer_models::instruments::OptionContract;
//! use pricer_pricing::mc::compare_with_closed_form;
//!
//! let put = OptionContract::put(95.0, 0.5, 0.2)
//!     .with_spot(100.0)
//!     .with_rate(0.10)
//!     .with_dividend_yield(0.05);
//!
//! let cmp = compare_with_closed_form(&put, ModelVariant::Dividend, 100_000, 1, Some(42)).unwrap();
//! println!("closed form {:.4}, MC {:.4} ± {:.4}",
//!     cmp.closed_form, cmp.estimate.price, cmp.estimate.std_error);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

/// Random number generation.
pub mod rng;

/// Monte Carlo simulation and estimation.
pub mod mc;

pub use mc::{
    compare_with_closed_form, estimate_call, estimate_call_price, simulate_paths,
    ClosedFormComparison, MonteCarloEstimate, SimulationConfig, SimulationError,
};
