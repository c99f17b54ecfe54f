//! Criterion benchmarks for closed-form pricing across model variants.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::analytical::{price, ModelVariant};
use pricer_models::instruments::OptionContract;

/// Benchmark one checked `price` call per variant.
fn bench_price_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("closed_form_price");

    let contract = OptionContract::call(100.0, 1.0, 0.2)
        .with_spot(100.0)
        .with_forward(102.0)
        .with_rate(0.05)
        .with_dividend_yield(0.02)
        .with_foreign_rate(0.03);

    for variant in ModelVariant::ALL {
        group.bench_with_input(
            BenchmarkId::new("price", variant.name()),
            &variant,
            |b, &variant| {
                b.iter(|| price(black_box(&contract), black_box(variant)).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark a strike ladder, the typical shape of a chain revaluation.
fn bench_strike_ladder(c: &mut Criterion) {
    let strikes: Vec<f64> = (50..=150).map(|k| k as f64).collect();
    let base = OptionContract::call(100.0, 0.5, 0.25)
        .with_spot(100.0)
        .with_rate(0.03);

    c.bench_function("strike_ladder_101", |b| {
        b.iter(|| {
            strikes
                .iter()
                .map(|&k| {
                    let mut contract = base;
                    contract.strike = k;
                    price(black_box(&contract), ModelVariant::Spot).unwrap_or(0.0)
                })
                .sum::<f64>()
        });
    });
}

criterion_group!(benches, bench_price_variants, bench_strike_ladder);
criterion_main!(benches);
