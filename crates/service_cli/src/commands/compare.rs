//! Compare command implementation
//!
//! Prices a contract in closed form and by Monte Carlo, optionally over
//! several independently seeded trials.

use pricer_models::analytical::ModelVariant;
use pricer_models::instruments::OptionContract;
use pricer_pricing::mc::compare_with_closed_form;
use pricer_pricing::rng::{entropy_seed, mix_seed};
use serde::Serialize;
use tracing::info;

use crate::config::{OutputFormat, SimulationSettings};
use crate::output::{self, Report};
use crate::{CliError, Result};

/// Trials counted as agreeing must lie within this many standard errors
pub const AGREEMENT_SE: f64 = 3.0;

/// One seeded comparison
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Trial {
    pub seed: u64,
    pub estimate: f64,
    pub std_error: f64,
    pub z_score: f64,
}

/// Output of the compare command
#[derive(Debug, Clone, Serialize)]
pub struct CompareReport {
    pub variant: ModelVariant,
    pub contract: OptionContract,
    pub closed_form: f64,
    pub n_paths: usize,
    pub n_steps: usize,
    pub trials: Vec<Trial>,
    /// Trials within `AGREEMENT_SE` standard errors of the closed form
    pub agreeing: usize,
}

impl Report for CompareReport {
    fn render_table(&self) -> String {
        let mut rows = vec![
            ("closed form", format!("{:.6}", self.closed_form)),
            ("paths", self.n_paths.to_string()),
            ("steps", self.n_steps.to_string()),
        ];
        for trial in &self.trials {
            rows.push((
                "trial",
                format!(
                    "{:.6} ± {:.6}  z={:+.2}  seed={}",
                    trial.estimate, trial.std_error, trial.z_score, trial.seed
                ),
            ));
        }
        rows.push((
            "within 3 SE",
            format!("{} of {}", self.agreeing, self.trials.len()),
        ));
        let title = format!("{} {} closed form vs Monte Carlo", self.variant, self.contract.kind);
        output::key_value_table(&title, &rows)
    }
}

/// Run the compare command
pub fn run(
    contract: &OptionContract,
    variant: ModelVariant,
    settings: SimulationSettings,
    trials: usize,
    format: OutputFormat,
) -> Result<()> {
    info!(%variant, trials, "Comparing closed form with Monte Carlo");
    let report = compare(contract, variant, settings, trials)?;
    output::emit(format, &report)
}

/// Run `trials` comparisons with seeds derived from the configured seed
pub fn compare(
    contract: &OptionContract,
    variant: ModelVariant,
    settings: SimulationSettings,
    trials: usize,
) -> Result<CompareReport> {
    if trials == 0 {
        return Err(CliError::InvalidArgument("--trials must be at least 1".to_string()));
    }

    let base_seed = settings.seed.unwrap_or_else(entropy_seed);
    let mut closed_form = f64::NAN;
    let mut results = Vec::with_capacity(trials);

    for i in 0..trials {
        // A single trial uses the configured seed as-is
        let seed = if i == 0 { base_seed } else { mix_seed(base_seed, i as u64) };
        let cmp = compare_with_closed_form(contract, variant, settings.paths, settings.steps, Some(seed))?;
        closed_form = cmp.closed_form;
        results.push(Trial {
            seed,
            estimate: cmp.estimate.price,
            std_error: cmp.estimate.std_error,
            z_score: cmp.z_score(),
        });
    }

    let agreeing = results
        .iter()
        .filter(|t| (t.estimate - closed_form).abs() <= AGREEMENT_SE * t.std_error)
        .count();

    Ok(CompareReport {
        variant,
        contract: *contract,
        closed_form,
        n_paths: settings.paths,
        n_steps: settings.steps,
        trials: results,
        agreeing,
    })
}
