//! quantbs CLI - Command Line Operations for Option Pricing
//!
//! This is the operational entry point for the quantbs pricing library.
//!
//! # Commands
//!
//! - `quantbs price` - Closed-form price under one or all model variants
//! - `quantbs simulate` - Simulate GBM paths and summarise terminal prices
//! - `quantbs compare` - Closed form against Monte Carlo
//! - `quantbs check` - Show environment and effective configuration
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate turns command-line flags and the
//! optional `quantbs.toml` into calls on the pricer crates. Results go to
//! stdout; logs go to stderr.

use std::path::Path;
use std::time::Duration;

use clap::{Parser, Subcommand};
use pricer_core::types::OptionKind;
use pricer_models::analytical::ModelVariant;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::{ContractArgs, SimulationArgs};
use config::{CliConfig, OutputFormat};

/// quantbs Option Pricing CLI
#[derive(Parser)]
#[command(name = "quantbs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "quantbs.toml")]
    config: String,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option in closed form
    Price {
        #[command(flatten)]
        contract: ContractArgs,

        /// Model variant (spot, dividend, futures, asay, currency, generalized);
        /// all applicable variants if omitted
        #[arg(short = 'm', long)]
        variant: Option<ModelVariant>,
    },

    /// Simulate geometric Brownian motion paths
    Simulate {
        /// Initial price
        #[arg(long)]
        spot: f64,

        /// Risk-free rate used for discounting
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        rate: f64,

        /// Drift; defaults to the risk-free rate
        #[arg(long, allow_hyphen_values = true)]
        drift: Option<f64>,

        /// Annualised volatility
        #[arg(long = "vol")]
        volatility: f64,

        /// Horizon in years
        #[arg(long)]
        maturity: f64,

        /// Estimate a European payoff at this strike
        #[arg(long)]
        strike: Option<f64>,

        /// Payoff kind for --strike (call, put)
        #[arg(long, default_value = "call")]
        kind: OptionKind,

        /// Include full trajectories in the output (paths × (steps + 1) at most 10,000,000)
        #[arg(long)]
        full_paths: bool,

        /// Abort the simulation after this many seconds
        #[arg(long)]
        time_limit: Option<f64>,

        #[command(flatten)]
        simulation: SimulationArgs,
    },

    /// Compare the closed-form price with a Monte Carlo estimate
    Compare {
        #[command(flatten)]
        contract: ContractArgs,

        /// Model variant
        #[arg(short = 'm', long, default_value = "spot")]
        variant: ModelVariant,

        /// Number of independently seeded trials
        #[arg(long, default_value_t = 1)]
        trials: usize,

        #[command(flatten)]
        simulation: SimulationArgs,
    },

    /// Check system configuration and dependencies
    Check,
}

fn init_tracing(config: &CliConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(Path::new(&cli.config))?;
    init_tracing(&config, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Price { contract, variant } => {
            commands::price::run(&contract.to_contract(), variant, format)
        }
        Commands::Simulate {
            spot,
            rate,
            drift,
            volatility,
            maturity,
            strike,
            kind,
            full_paths,
            time_limit,
            simulation,
        } => {
            let params = commands::simulate::ProcessParams {
                spot,
                rate,
                drift,
                volatility,
                maturity,
            };
            let payoff = strike.map(|strike| commands::simulate::PayoffRequest { kind, strike });
            let time_limit = time_limit
                .map(|secs| {
                    Duration::try_from_secs_f64(secs).map_err(|_| {
                        CliError::InvalidArgument(format!("invalid --time-limit: {}", secs))
                    })
                })
                .transpose()?;
            commands::simulate::run(
                params,
                payoff,
                simulation.apply(config.simulation),
                full_paths,
                time_limit,
                format,
            )
        }
        Commands::Compare {
            contract,
            variant,
            trials,
            simulation,
        } => commands::compare::run(
            &contract.to_contract(),
            variant,
            simulation.apply(config.simulation),
            trials,
            format,
        ),
        Commands::Check => commands::check::run(&config, &cli.config, format),
    }
}
