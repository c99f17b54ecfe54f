//! Monte Carlo simulation of geometric Brownian motion.
//!
//! # Architecture
//!
//! ```text
//! SimulationConfig ──► simulate / simulate_paths ──► terminal prices ──► estimate_call
//!        │                   (rayon batches)                            estimate_put
//!        │
//!        └──────────► simulate_full_paths ──► PathSet (plotting)
//!
//! OptionContract + ModelVariant ──► compare_with_closed_form ──► ClosedFormComparison
//! ```
//!
//! # Discounting
//!
//! The drift is an explicit input. Pricing requires a risk-neutral drift
//! (`drift = rate` for a non-dividend spot, or the variant's cost of carry),
//! and the estimators discount the mean payoff exactly once by `exp(−r·T)`.
//!
//! # Example
//!
//! ```rust
//! use pricer_pricing::mc::{estimate_call, simulate_paths, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .n_paths(20_000)
//!     .n_steps(1)
//!     .spot(100.0)
//!     .rate(0.05)
//!     .risk_neutral()
//!     .volatility(0.2)
//!     .maturity(1.0)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let terminals = simulate_paths(&config);
//! let est = estimate_call(&terminals, 100.0, config.rate(), config.maturity()).unwrap();
//!
//! // Black-Scholes price is 10.4506
//! assert!((est.price - 10.4506).abs() < 4.0 * est.std_error);
//! ```

pub mod cancel;
pub mod config;
pub mod error;
pub mod estimator;
pub mod paths;
pub mod pricer;

pub use cancel::CancellationToken;
pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use error::{ConfigError, SimulationError};
pub use estimator::{estimate, estimate_call, estimate_call_price, estimate_put, MonteCarloEstimate};
pub use paths::{
    simulate, simulate_full_paths, simulate_paths, simulate_paths_cancellable, PathSet,
    SimulationSummary, BATCH_SIZE,
};
pub use pricer::{compare_with_closed_form, simulation_config_for, ClosedFormComparison};
