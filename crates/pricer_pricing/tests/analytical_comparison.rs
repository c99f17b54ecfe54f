//! Monte Carlo estimates against closed-form prices.
//!
//! Every test is seeded, so results are deterministic; the tolerances are
//! nevertheless statistical (multiples of the reported standard error).

use pricer_core::types::OptionKind;
use pricer_models::analytical::{price, ModelVariant};
use pricer_models::instruments::OptionContract;
use pricer_pricing::mc::{
    compare_with_closed_form, estimate_call, simulate_paths, SimulationConfig,
};

fn at_the_money_call() -> OptionContract {
    OptionContract::call(100.0, 1.0, 0.2)
        .with_spot(100.0)
        .with_rate(0.05)
}

#[test]
fn test_million_path_estimates_within_three_standard_errors() {
    let contract = at_the_money_call();
    let closed_form = price(&contract, ModelVariant::Spot).unwrap();

    let trials = 20;
    let hits = (0..trials)
        .filter(|&trial| {
            let config = SimulationConfig::builder()
                .n_paths(1_000_000)
                .n_steps(1)
                .spot(100.0)
                .rate(0.05)
                .risk_neutral()
                .volatility(0.2)
                .maturity(1.0)
                .seed(1_000 + trial)
                .build()
                .unwrap();

            let terminals = simulate_paths(&config);
            let est = estimate_call(&terminals, 100.0, 0.05, 1.0).unwrap();
            est.contains(closed_form, 3.0)
        })
        .count();

    assert!(hits >= 19, "only {} of {} trials within 3 SE", hits, trials);
}

#[test]
fn test_every_variant_converges() {
    let cases = [
        (
            ModelVariant::Spot,
            OptionContract::call(65.0, 0.25, 0.30)
                .with_spot(60.0)
                .with_rate(0.08),
        ),
        (
            ModelVariant::Dividend,
            OptionContract::put(95.0, 0.5, 0.20)
                .with_spot(100.0)
                .with_rate(0.10)
                .with_dividend_yield(0.05),
        ),
        (
            ModelVariant::Futures,
            OptionContract::call(19.0, 0.75, 0.28)
                .with_forward(19.0)
                .with_rate(0.10),
        ),
        (
            ModelVariant::Asay,
            OptionContract::call(19.0, 0.75, 0.28)
                .with_forward(19.0)
                .with_rate(0.10),
        ),
        (
            ModelVariant::Currency,
            OptionContract::call(1.60, 0.5, 0.12)
                .with_spot(1.56)
                .with_rate(0.06)
                .with_foreign_rate(0.08),
        ),
        (
            ModelVariant::Generalized,
            OptionContract::put(100.0, 1.0, 0.25)
                .with_spot(100.0)
                .with_rate(0.03)
                .with_dividend_yield(0.01),
        ),
    ];

    for (i, (variant, contract)) in cases.iter().enumerate() {
        let cmp = compare_with_closed_form(contract, *variant, 200_000, 1, Some(7 + i as u64))
            .unwrap();
        assert!(
            cmp.within(4.0),
            "{} {}: closed form {}, estimate {} ± {} (z = {})",
            variant,
            contract.kind,
            cmp.closed_form,
            cmp.estimate.price,
            cmp.estimate.std_error,
            cmp.z_score()
        );
    }
}

#[test]
fn test_step_count_does_not_bias_terminal_distribution() {
    let contract = at_the_money_call();
    let one = compare_with_closed_form(&contract, ModelVariant::Spot, 100_000, 1, Some(3)).unwrap();
    let many = compare_with_closed_form(&contract, ModelVariant::Spot, 100_000, 50, Some(3)).unwrap();

    assert!(one.within(4.0), "z = {}", one.z_score());
    assert!(many.within(4.0), "z = {}", many.z_score());
}

#[test]
fn test_standard_error_scales_with_inverse_root_n() {
    let contract = at_the_money_call();
    let small = compare_with_closed_form(&contract, ModelVariant::Spot, 40_000, 1, Some(5)).unwrap();
    let large = compare_with_closed_form(&contract, ModelVariant::Spot, 160_000, 1, Some(6)).unwrap();

    let ratio = small.estimate.std_error / large.estimate.std_error;
    assert!((ratio - 2.0).abs() < 0.2, "SE ratio {}", ratio);
}

#[test]
fn test_put_call_parity_on_shared_paths() {
    let config = SimulationConfig::builder()
        .n_paths(50_000)
        .n_steps(1)
        .spot(100.0)
        .rate(0.05)
        .risk_neutral()
        .volatility(0.2)
        .maturity(1.0)
        .seed(17)
        .build()
        .unwrap();

    let terminals = simulate_paths(&config);
    let call = pricer_pricing::mc::estimate(OptionKind::Call, &terminals, 100.0, 0.05, 1.0).unwrap();
    let put = pricer_pricing::mc::estimate(OptionKind::Put, &terminals, 100.0, 0.05, 1.0).unwrap();

    // C − P = e^(−rT)·(mean(S_T) − K) holds exactly on a shared sample
    let mean_s = terminals.iter().sum::<f64>() / terminals.len() as f64;
    let expected = (-0.05_f64).exp() * (mean_s - 100.0);
    assert!((call.price - put.price - expected).abs() < 1e-9);
}
