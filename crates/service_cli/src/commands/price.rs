//! Price command implementation
//!
//! Prices a European option in closed form under one model variant, or under
//! every variant the contract's fields support.

use pricer_core::types::PricingError;
use pricer_models::analytical::{self, ModelVariant};
use pricer_models::instruments::OptionContract;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::OutputFormat;
use crate::output::{self, Report};
use crate::{CliError, Result};

/// One closed-form price
#[derive(Debug, Clone, Serialize)]
pub struct VariantPrice {
    pub variant: ModelVariant,
    pub cost_of_carry: f64,
    pub price: f64,
}

/// Output of the price command
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub contract: OptionContract,
    pub prices: Vec<VariantPrice>,
}

impl Report for PriceReport {
    fn render_table(&self) -> String {
        let rows: Vec<(&str, String)> = self
            .prices
            .iter()
            .map(|p| {
                (
                    p.variant.name(),
                    format!("{:.6}  (b = {:+.4})", p.price, p.cost_of_carry),
                )
            })
            .collect();
        let title = format!(
            "{} K={} T={} σ={}",
            self.contract.kind, self.contract.strike, self.contract.maturity, self.contract.volatility
        );
        output::key_value_table(&title, &rows)
    }
}

/// Run the price command
pub fn run(contract: &OptionContract, variant: Option<ModelVariant>, format: OutputFormat) -> Result<()> {
    info!("Pricing {} option", contract.kind);
    let report = price_contract(contract, variant)?;
    output::emit(format, &report)
}

/// Price under `variant`, or under every variant the contract supports
pub fn price_contract(contract: &OptionContract, variant: Option<ModelVariant>) -> Result<PriceReport> {
    analytical::validate_contract(contract)?;

    let variants: Vec<ModelVariant> = match variant {
        Some(v) => vec![v],
        None => ModelVariant::ALL.to_vec(),
    };

    let mut prices = Vec::with_capacity(variants.len());
    for v in variants {
        match price_one(contract, v) {
            Ok(p) => prices.push(p),
            // Skip variants whose inputs are absent, unless one was asked for
            Err(PricingError::InvalidModelVariant { missing, .. }) if variant.is_none() => {
                debug!(variant = %v, missing, "skipping variant");
            }
            Err(err) => return Err(err.into()),
        }
    }

    if prices.is_empty() {
        return Err(CliError::InvalidArgument(
            "contract needs --spot or --forward to be priced".to_string(),
        ));
    }

    Ok(PriceReport {
        contract: *contract,
        prices,
    })
}

fn price_one(contract: &OptionContract, variant: ModelVariant) -> std::result::Result<VariantPrice, PricingError> {
    let carry = variant.carry(contract)?;
    let price = analytical::price(contract, variant)?;
    Ok(VariantPrice {
        variant,
        cost_of_carry: carry.cost_of_carry,
        price,
    })
}
