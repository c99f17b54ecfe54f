//! Check command implementation
//!
//! Reports the runtime environment and the effective configuration, and
//! runs a closed-form sanity check against a published reference price.

use pricer_models::analytical::{price, ModelVariant};
use pricer_models::instruments::OptionContract;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::{CliConfig, OutputFormat};
use crate::output::{self, Report};
use crate::Result;

/// Black-Scholes call, S=60 K=65 T=0.25 r=0.08 σ=0.30
const REFERENCE_PRICE: f64 = 2.13336;
const REFERENCE_TOLERANCE: f64 = 1e-4;

/// Output of the check command
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub version: &'static str,
    pub logical_cpus: usize,
    pub physical_cpus: usize,
    pub rayon_threads: usize,
    pub config_path: String,
    pub log_level: String,
    pub output_format: String,
    pub default_paths: usize,
    pub default_steps: usize,
    pub default_seed: Option<u64>,
    pub reference_price: f64,
    pub reference_ok: bool,
}

impl Report for CheckReport {
    fn render_table(&self) -> String {
        let rows = vec![
            ("version", self.version.to_string()),
            ("logical cpus", self.logical_cpus.to_string()),
            ("physical cpus", self.physical_cpus.to_string()),
            ("rayon threads", self.rayon_threads.to_string()),
            ("config file", self.config_path.clone()),
            ("log level", self.log_level.clone()),
            ("output format", self.output_format.clone()),
            ("default paths", self.default_paths.to_string()),
            ("default steps", self.default_steps.to_string()),
            (
                "default seed",
                self.default_seed
                    .map_or_else(|| "random".to_string(), |s| s.to_string()),
            ),
            (
                "reference price",
                format!(
                    "{:.5} ({})",
                    self.reference_price,
                    if self.reference_ok { "ok" } else { "MISMATCH" }
                ),
            ),
        ];
        output::key_value_table("quantbs system check", &rows)
    }
}

/// Run the check command
pub fn run(config: &CliConfig, config_path: &str, format: OutputFormat) -> Result<()> {
    info!("Running system check");
    let report = check(config, config_path)?;
    if !report.reference_ok {
        warn!(
            price = report.reference_price,
            expected = REFERENCE_PRICE,
            "reference price mismatch"
        );
    }
    output::emit(format, &report)
}

/// Collect the check report
pub fn check(config: &CliConfig, config_path: &str) -> Result<CheckReport> {
    let reference = OptionContract::call(65.0, 0.25, 0.30)
        .with_spot(60.0)
        .with_rate(0.08);
    let reference_price = price(&reference, ModelVariant::Spot)?;

    Ok(CheckReport {
        version: env!("CARGO_PKG_VERSION"),
        logical_cpus: num_cpus::get(),
        physical_cpus: num_cpus::get_physical(),
        rayon_threads: rayon::current_num_threads(),
        config_path: config_path.to_string(),
        log_level: config.log_level.to_string(),
        output_format: config.output_format.to_string(),
        default_paths: config.simulation.paths,
        default_steps: config.simulation.steps,
        default_seed: config.simulation.seed,
        reference_price,
        reference_ok: (reference_price - REFERENCE_PRICE).abs() < REFERENCE_TOLERANCE,
    })
}
