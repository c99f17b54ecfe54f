//! # Random Number Generation Infrastructure
//!
//! This module provides random number generation facilities for Monte Carlo
//! simulations.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators are seeded; unseeded runs draw a seed
//!   and report it
//! - **Independence**: Every batch of paths owns a generator derived from
//!   `(base_seed, batch_index)`; no generator is shared across threads
//! - **Static dispatch**: No `Box<dyn Trait>` in hot paths
//!
//! ## Module Structure
//!
//! - [`prng`]: Pseudo-random number generator wrapper with seed management
//! - [`seed`]: SplitMix64 stream-seed derivation
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

pub mod prng;
pub mod seed;

// Public re-exports
pub use prng::PricerRng;
pub use seed::{entropy_seed, mix_seed};
