//! Path generation for Monte Carlo simulation.
//!
//! This module implements geometric Brownian motion paths using the exact
//! log-space discretisation:
//!
//! ```text
//! ln S(t+dt) = ln S(t) + (μ − σ²/2)·dt + σ·√dt·Z,    Z ~ N(0, 1) i.i.d.
//! ```
//!
//! # Independence and Reproducibility
//!
//! Paths are grouped into batches of [`BATCH_SIZE`]. Batch `i` draws from its
//! own generator seeded by `mix_seed(base_seed, i)`, and every path consumes
//! a fresh run of `n_steps` normal variates from that generator. No state is
//! shared between paths, so batches run in parallel on the rayon pool and
//! the output is identical for any thread count.
//!
//! # Memory Layout
//!
//! [`PathSet`] stores paths in row-major order:
//! `data[path_idx * (n_steps + 1) + step_idx]`, where `step_idx = 0` holds
//! the initial spot price.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{debug, trace, warn};

use super::cancel::CancellationToken;
use super::config::SimulationConfig;
use super::error::SimulationError;
use crate::rng::{entropy_seed, PricerRng};

/// Number of paths generated per batch (and per random stream).
pub const BATCH_SIZE: usize = 4096;

/// Terminal prices and the seed that produced them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationSummary {
    /// One terminal price per path, in path order.
    pub terminal_prices: Vec<f64>,
    /// Base seed of the run; pass it back via the config to reproduce it.
    pub seed: u64,
    /// Number of batches the paths were split into.
    pub n_batches: usize,
}

/// Full simulated trajectories, for plotting and path inspection.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{simulate_full_paths, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_paths(3)
///     .n_steps(4)
///     .spot(100.0)
///     .risk_neutral()
///     .volatility(0.2)
///     .maturity(1.0)
///     .seed(1)
///     .build()
///     .unwrap();
///
/// let paths = simulate_full_paths(&config);
/// assert_eq!(paths.n_paths(), 3);
/// assert_eq!(paths.path(0).unwrap().len(), 5);
/// assert_eq!(paths.path(0).unwrap()[0], 100.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSet {
    n_paths: usize,
    n_steps: usize,
    dt: f64,
    seed: u64,
    data: Vec<f64>,
}

impl PathSet {
    /// Number of paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of steps per path (each path holds `n_steps + 1` points).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Base seed of the run.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns path `index`, or `None` if out of range.
    #[inline]
    pub fn path(&self, index: usize) -> Option<&[f64]> {
        let width = self.n_steps + 1;
        self.data.get(index * width..(index + 1) * width)
    }

    /// Iterates over paths in order.
    pub fn paths(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.n_steps + 1)
    }

    /// Last point of every path.
    pub fn terminal_prices(&self) -> Vec<f64> {
        self.paths().map(|path| path[self.n_steps]).collect()
    }

    /// Observation times `0, dt, ..., T`.
    pub fn times(&self) -> Vec<f64> {
        (0..=self.n_steps).map(|i| i as f64 * self.dt).collect()
    }

    /// Raw row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// Precomputed per-step constants.
#[derive(Clone, Copy, Debug)]
struct StepConstants {
    log_spot: f64,
    drift_dt: f64,
    vol_sqrt_dt: f64,
    n_steps: usize,
}

impl StepConstants {
    fn new(config: &SimulationConfig) -> Self {
        let dt = config.dt();
        let sigma = config.volatility();
        Self {
            log_spot: config.spot().ln(),
            drift_dt: (config.drift() - 0.5 * sigma * sigma) * dt,
            vol_sqrt_dt: sigma * dt.sqrt(),
            n_steps: config.n_steps(),
        }
    }

    /// Evolves one path from a fresh set of increments, calling `visit`
    /// with the log price after every step. Returns the terminal log price.
    ///
    /// `normals` is scratch space of length `n_steps`, reused across paths.
    #[inline]
    fn evolve<F: FnMut(f64)>(&self, rng: &mut PricerRng, normals: &mut [f64], mut visit: F) -> f64 {
        rng.fill_normal(normals);
        let mut log_s = self.log_spot;
        for &z in normals.iter() {
            log_s += self.drift_dt + self.vol_sqrt_dt * z;
            visit(log_s);
        }
        log_s
    }
}

/// Split of `n_paths` into fixed-size batches.
#[derive(Clone, Copy, Debug)]
struct BatchPlan {
    n_paths: usize,
    n_batches: usize,
}

impl BatchPlan {
    fn new(n_paths: usize) -> Self {
        Self {
            n_paths,
            n_batches: n_paths.div_ceil(BATCH_SIZE),
        }
    }

    #[inline]
    fn len(&self, batch: usize) -> usize {
        BATCH_SIZE.min(self.n_paths - batch * BATCH_SIZE)
    }
}

fn terminal_batch(k: &StepConstants, seed: u64, batch: usize, len: usize) -> Vec<f64> {
    let mut rng = PricerRng::for_stream(seed, batch as u64);
    let mut normals = vec![0.0; k.n_steps];
    (0..len)
        .map(|_| k.evolve(&mut rng, &mut normals, |_| {}).exp())
        .collect()
}

fn full_batch(k: &StepConstants, spot: f64, seed: u64, batch: usize, len: usize) -> Vec<f64> {
    let mut rng = PricerRng::for_stream(seed, batch as u64);
    let mut normals = vec![0.0; k.n_steps];
    let mut out = Vec::with_capacity(len * (k.n_steps + 1));
    for _ in 0..len {
        out.push(spot);
        k.evolve(&mut rng, &mut normals, |log_s| out.push(log_s.exp()));
    }
    out
}

fn resolve_seed(config: &SimulationConfig) -> u64 {
    config.seed().unwrap_or_else(|| {
        let seed = entropy_seed();
        debug!(seed, "no seed configured, drew one from entropy");
        seed
    })
}

/// Simulates terminal prices, one per path, in path order.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{simulate_paths, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_paths(1_000)
///     .n_steps(12)
///     .spot(100.0)
///     .rate(0.05)
///     .risk_neutral()
///     .volatility(0.2)
///     .maturity(1.0)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let terminals = simulate_paths(&config);
/// assert_eq!(terminals.len(), 1_000);
/// assert!(terminals.iter().all(|&s| s > 0.0));
/// ```
pub fn simulate_paths(config: &SimulationConfig) -> Vec<f64> {
    simulate(config).terminal_prices
}

/// Simulates terminal prices and reports the seed used.
pub fn simulate(config: &SimulationConfig) -> SimulationSummary {
    let seed = resolve_seed(config);
    let plan = BatchPlan::new(config.n_paths());
    let k = StepConstants::new(config);

    debug!(
        n_paths = config.n_paths(),
        n_steps = config.n_steps(),
        n_batches = plan.n_batches,
        seed,
        "simulating terminal prices"
    );

    let batches: Vec<Vec<f64>> = (0..plan.n_batches)
        .into_par_iter()
        .map(|batch| terminal_batch(&k, seed, batch, plan.len(batch)))
        .collect();

    SimulationSummary {
        terminal_prices: batches.concat(),
        seed,
        n_batches: plan.n_batches,
    }
}

/// Simulates terminal prices, checking `token` before every batch.
///
/// For the same seed the result equals [`simulate`].
///
/// # Errors
///
/// Returns `SimulationError::Cancelled` if the token is triggered before the
/// last batch starts.
pub fn simulate_paths_cancellable(
    config: &SimulationConfig,
    token: &CancellationToken,
) -> Result<SimulationSummary, SimulationError> {
    let seed = resolve_seed(config);
    let plan = BatchPlan::new(config.n_paths());
    let k = StepConstants::new(config);
    let completed = AtomicUsize::new(0);

    debug!(
        n_paths = config.n_paths(),
        n_steps = config.n_steps(),
        n_batches = plan.n_batches,
        seed,
        "simulating terminal prices (cancellable)"
    );

    let batches: Result<Vec<Vec<f64>>, SimulationError> = (0..plan.n_batches)
        .into_par_iter()
        .map(|batch| {
            if token.is_cancelled() {
                return Err(SimulationError::Cancelled {
                    completed_batches: completed.load(Ordering::Relaxed),
                    total_batches: plan.n_batches,
                });
            }
            let prices = terminal_batch(&k, seed, batch, plan.len(batch));
            completed.fetch_add(1, Ordering::Relaxed);
            trace!(batch, "batch complete");
            Ok(prices)
        })
        .collect();

    match batches {
        Ok(batches) => Ok(SimulationSummary {
            terminal_prices: batches.concat(),
            seed,
            n_batches: plan.n_batches,
        }),
        Err(err) => {
            warn!(%err, "simulation aborted");
            Err(err)
        }
    }
}

/// Simulates full trajectories.
///
/// Memory grows as `n_paths × (n_steps + 1)`; intended for plotting a
/// modest number of paths. Terminal values equal those of
/// [`simulate_paths`] for the same seed.
pub fn simulate_full_paths(config: &SimulationConfig) -> PathSet {
    let seed = resolve_seed(config);
    let plan = BatchPlan::new(config.n_paths());
    let k = StepConstants::new(config);
    let spot = config.spot();

    debug!(
        n_paths = config.n_paths(),
        n_steps = config.n_steps(),
        seed,
        "simulating full paths"
    );

    let batches: Vec<Vec<f64>> = (0..plan.n_batches)
        .into_par_iter()
        .map(|batch| full_batch(&k, spot, seed, batch, plan.len(batch)))
        .collect();

    PathSet {
        n_paths: config.n_paths(),
        n_steps: config.n_steps(),
        dt: config.dt(),
        seed,
        data: batches.concat(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config(n_paths: usize, n_steps: usize, seed: u64) -> SimulationConfig {
        SimulationConfig::builder()
            .n_paths(n_paths)
            .n_steps(n_steps)
            .spot(100.0)
            .rate(0.05)
            .risk_neutral()
            .volatility(0.2)
            .maturity(1.0)
            .seed(seed)
            .build()
            .unwrap()
    }

    #[test]
    fn test_batch_plan() {
        let plan = BatchPlan::new(BATCH_SIZE * 2 + 5);
        assert_eq!(plan.n_batches, 3);
        assert_eq!(plan.len(0), BATCH_SIZE);
        assert_eq!(plan.len(2), 5);

        assert_eq!(BatchPlan::new(1).n_batches, 1);
        assert_eq!(BatchPlan::new(BATCH_SIZE).n_batches, 1);
    }

    #[test]
    fn test_terminal_prices_length_and_positivity() {
        let terminals = simulate_paths(&config(10_000, 10, 42));
        assert_eq!(terminals.len(), 10_000);
        for &s in &terminals {
            assert!(s > 0.0 && s.is_finite(), "bad terminal price {}", s);
        }
    }

    #[test]
    fn test_first_path_follows_stream_zero_normals() {
        let cfg = config(2, 3, 77);
        let paths = simulate_full_paths(&cfg);

        let mut z = [0.0; 3];
        PricerRng::for_stream(77, 0).fill_normal(&mut z);

        let dt = cfg.dt();
        let sigma = cfg.volatility();
        let mut log_s = cfg.spot().ln();
        let first = paths.path(0).unwrap();
        for (step, &zi) in z.iter().enumerate() {
            log_s += (cfg.drift() - 0.5 * sigma * sigma) * dt + sigma * dt.sqrt() * zi;
            assert_relative_eq!(first[step + 1], log_s.exp(), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_reproducibility() {
        let a = simulate_paths(&config(5_000, 5, 12345));
        let b = simulate_paths(&config(5_000, 5, 12345));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds() {
        let a = simulate_paths(&config(100, 5, 1));
        let b = simulate_paths(&config(100, 5, 2));
        assert!(a.iter().zip(&b).any(|(x, y)| x != y));
    }

    #[test]
    fn test_independent_of_thread_count() {
        let cfg = config(BATCH_SIZE * 3 + 17, 4, 7);
        let parallel = simulate_paths(&cfg);
        let single = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap()
            .install(|| simulate_paths(&cfg));
        assert_eq!(parallel, single);
    }

    #[test]
    fn test_unseeded_run_reports_seed() {
        let cfg = SimulationConfig::builder()
            .n_paths(50)
            .n_steps(3)
            .spot(100.0)
            .risk_neutral()
            .volatility(0.2)
            .maturity(1.0)
            .build()
            .unwrap();

        let first = simulate(&cfg);
        let replay = simulate(&cfg.with_seed(first.seed));
        assert_eq!(first.terminal_prices, replay.terminal_prices);
    }

    #[test]
    fn test_zero_volatility_is_deterministic_growth() {
        let cfg = SimulationConfig::builder()
            .n_paths(10)
            .n_steps(50)
            .spot(100.0)
            .drift(0.03)
            .volatility(0.0)
            .maturity(2.0)
            .seed(0)
            .build()
            .unwrap();

        let expected = 100.0 * (0.03_f64 * 2.0).exp();
        for s in simulate_paths(&cfg) {
            assert_relative_eq!(s, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_full_paths_match_terminal_prices() {
        let cfg = config(BATCH_SIZE + 100, 8, 99);
        let full = simulate_full_paths(&cfg);
        let terminals = simulate_paths(&cfg);

        assert_eq!(full.n_paths(), cfg.n_paths());
        assert_eq!(full.as_slice().len(), cfg.n_paths() * 9);
        assert_eq!(full.terminal_prices(), terminals);
        assert!(full.paths().all(|path| path[0] == 100.0));
    }

    #[test]
    fn test_path_set_accessors() {
        let full = simulate_full_paths(&config(4, 4, 3));
        assert!(full.path(3).is_some());
        assert!(full.path(4).is_none());
        assert_eq!(full.times(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(full.seed(), 3);
    }

    #[test]
    fn test_statistical_mean() {
        // E[S(T)] = S(0)·exp(μT)
        let terminals = simulate_paths(&config(100_000, 1, 42));
        let mean = terminals.iter().sum::<f64>() / terminals.len() as f64;
        let expected = 100.0 * 0.05_f64.exp();
        assert_relative_eq!(mean, expected, max_relative = 0.01);
    }

    #[test]
    fn test_log_return_variance() {
        // Var[ln S(T)] = σ²T regardless of step count
        let terminals = simulate_paths(&config(50_000, 20, 11));
        let logs: Vec<f64> = terminals.iter().map(|s| (s / 100.0).ln()).collect();
        let n = logs.len() as f64;
        let mean = logs.iter().sum::<f64>() / n;
        let var = logs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        assert_relative_eq!(var, 0.04, max_relative = 0.03);
        assert_relative_eq!(mean, 0.05 - 0.02, epsilon = 0.005);
    }

    #[test]
    fn test_neighbouring_paths_uncorrelated() {
        // A shared increment sequence across paths would show up here
        let terminals = simulate_paths(&config(40_000, 5, 5));
        let logs: Vec<f64> = terminals.iter().map(|s| s.ln()).collect();
        let n = logs.len() as f64;
        let mean = logs.iter().sum::<f64>() / n;
        let var = logs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let cov = logs
            .windows(2)
            .map(|w| (w[0] - mean) * (w[1] - mean))
            .sum::<f64>()
            / (n - 1.0);
        let corr = cov / var;
        assert!(corr.abs() < 5.0 / n.sqrt(), "lag-1 correlation {}", corr);
    }

    #[test]
    fn test_cancellable_matches_plain_run() {
        let cfg = config(BATCH_SIZE * 2, 3, 21);
        let token = CancellationToken::new();
        let summary = simulate_paths_cancellable(&cfg, &token).unwrap();
        assert_eq!(summary.terminal_prices, simulate_paths(&cfg));
        assert_eq!(summary.n_batches, 2);
        assert_eq!(summary.seed, 21);
    }

    #[test]
    fn test_cancelled_before_start() {
        let cfg = config(BATCH_SIZE * 4, 3, 21);
        let token = CancellationToken::new();
        token.cancel();

        let result = simulate_paths_cancellable(&cfg, &token);
        assert!(matches!(
            result,
            Err(SimulationError::Cancelled {
                completed_batches: 0,
                total_batches: 4
            })
        ));
    }
}
