//! Simulate command implementation
//!
//! Runs a geometric Brownian motion simulation, summarises the terminal
//! distribution and optionally estimates a European payoff from it.

use std::time::Duration;

use pricer_core::types::OptionKind;
use pricer_pricing::mc::{
    estimate, simulate_full_paths, simulate_paths_cancellable, CancellationToken,
    MonteCarloEstimate, PathSet, SimulationConfig,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{OutputFormat, SimulationSettings};
use crate::output::{self, Report};
use crate::{CliError, Result};

/// Largest `paths × (steps + 1)` accepted together with `--full-paths`
pub const MAX_FULL_PATH_POINTS: usize = 10_000_000;

/// Process parameters for the simulate command
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessParams {
    pub spot: f64,
    pub rate: f64,
    /// `None` means risk-neutral (drift = rate)
    pub drift: Option<f64>,
    pub volatility: f64,
    pub maturity: f64,
}

/// Optional payoff to estimate from the simulated terminals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayoffRequest {
    pub kind: OptionKind,
    pub strike: f64,
}

/// Summary of the terminal price sample
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TerminalStats {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// Analytical mean S·exp(μT)
    pub expected_mean: f64,
}

/// Output of the simulate command
#[derive(Debug, Clone, Serialize)]
pub struct SimulateReport {
    pub seed: u64,
    pub n_paths: usize,
    pub n_steps: usize,
    pub drift: f64,
    pub terminal: TerminalStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payoff: Option<PayoffEstimate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<PathSet>,
}

/// Payoff estimate with its inputs
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PayoffEstimate {
    pub kind: OptionKind,
    pub strike: f64,
    pub estimate: MonteCarloEstimate,
}

impl Report for SimulateReport {
    fn render_table(&self) -> String {
        let t = &self.terminal;
        let mut rows = vec![
            ("seed", self.seed.to_string()),
            ("paths", self.n_paths.to_string()),
            ("steps", self.n_steps.to_string()),
            ("drift", format!("{:.6}", self.drift)),
            ("mean S(T)", format!("{:.6}", t.mean)),
            ("expected S(T)", format!("{:.6}", t.expected_mean)),
            ("std dev S(T)", format!("{:.6}", t.std_dev)),
            ("min S(T)", format!("{:.6}", t.min)),
            ("max S(T)", format!("{:.6}", t.max)),
        ];
        if let Some(p) = &self.payoff {
            let (lo, hi) = p.estimate.confidence_interval(1.96);
            rows.push(("payoff", format!("{} K={}", p.kind, p.strike)));
            rows.push(("estimate", format!("{:.6}", p.estimate.price)));
            rows.push(("std error", format!("{:.6}", p.estimate.std_error)));
            rows.push(("95% interval", format!("[{:.6}, {:.6}]", lo, hi)));
        }
        if let Some(paths) = &self.paths {
            rows.push((
                "full paths",
                format!("{} x {} points (use --format json)", paths.n_paths(), paths.n_steps() + 1),
            ));
        }
        output::key_value_table("GBM simulation", &rows)
    }
}

/// Run the simulate command
pub fn run(
    params: ProcessParams,
    payoff: Option<PayoffRequest>,
    settings: SimulationSettings,
    full_paths: bool,
    time_limit: Option<Duration>,
    format: OutputFormat,
) -> Result<()> {
    info!(
        paths = settings.paths,
        steps = settings.steps,
        "Starting simulation"
    );
    let token = CancellationToken::new();
    if let Some(limit) = time_limit {
        arm_deadline(&token, limit);
    }
    let report = simulate_report(params, payoff, settings, full_paths, &token)?;
    output::emit(format, &report)
}

/// Cancel `token` after `limit` from a background thread
fn arm_deadline(token: &CancellationToken, limit: Duration) {
    let token = token.clone();
    std::thread::spawn(move || {
        std::thread::sleep(limit);
        debug!(?limit, "time limit reached");
        token.cancel();
    });
}

/// Build the simulation, run it and summarise the result
pub fn simulate_report(
    params: ProcessParams,
    payoff: Option<PayoffRequest>,
    settings: SimulationSettings,
    full_paths: bool,
    token: &CancellationToken,
) -> Result<SimulateReport> {
    let builder = SimulationConfig::builder()
        .n_paths(settings.paths)
        .n_steps(settings.steps)
        .spot(params.spot)
        .rate(params.rate)
        .volatility(params.volatility)
        .maturity(params.maturity)
        .maybe_seed(settings.seed);
    let builder = match params.drift {
        Some(mu) => builder.drift(mu),
        None => builder.risk_neutral(),
    };
    let config = builder.build().map_err(pricer_pricing::mc::SimulationError::from)?;
    if full_paths {
        check_full_path_size(config.n_paths(), config.n_steps())?;
    }

    let summary = simulate_paths_cancellable(&config, token)?;
    let terminal = terminal_stats(&summary.terminal_prices, &config);

    let payoff = match payoff {
        Some(req) => {
            let est = estimate(
                req.kind,
                &summary.terminal_prices,
                req.strike,
                config.rate(),
                config.maturity(),
            )?;
            Some(PayoffEstimate {
                kind: req.kind,
                strike: req.strike,
                estimate: est,
            })
        }
        None => None,
    };

    // Replays the same seed so the trajectories match the summary above
    let paths = full_paths.then(|| simulate_full_paths(&config.with_seed(summary.seed)));

    Ok(SimulateReport {
        seed: summary.seed,
        n_paths: config.n_paths(),
        n_steps: config.n_steps(),
        drift: config.drift(),
        terminal,
        payoff,
        paths,
    })
}

fn check_full_path_size(n_paths: usize, n_steps: usize) -> Result<()> {
    match n_paths.checked_mul(n_steps + 1) {
        Some(points) if points <= MAX_FULL_PATH_POINTS => Ok(()),
        _ => Err(CliError::InvalidArgument(format!(
            "--full-paths would store {} x {} points, limit is {}",
            n_paths,
            n_steps + 1,
            MAX_FULL_PATH_POINTS
        ))),
    }
}

fn terminal_stats(terminals: &[f64], config: &SimulationConfig) -> TerminalStats {
    let n = terminals.len() as f64;
    let mean = terminals.iter().sum::<f64>() / n;
    let var = if terminals.len() > 1 {
        terminals.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1.0)
    } else {
        0.0
    };
    let (min, max) = terminals
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| (lo.min(s), hi.max(s)));

    TerminalStats {
        mean,
        std_dev: var.sqrt(),
        min,
        max,
        expected_mean: config.spot() * (config.drift() * config.maturity()).exp(),
    }
}
