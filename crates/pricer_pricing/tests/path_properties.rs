//! Property-based tests for path simulation.

use pricer_pricing::mc::{simulate_full_paths, simulate_paths, SimulationConfig};
use proptest::prelude::*;

fn config(
    n_paths: usize,
    n_steps: usize,
    spot: f64,
    drift: f64,
    vol: f64,
    maturity: f64,
    seed: u64,
) -> SimulationConfig {
    SimulationConfig::builder()
        .n_paths(n_paths)
        .n_steps(n_steps)
        .spot(spot)
        .drift(drift)
        .volatility(vol)
        .maturity(maturity)
        .seed(seed)
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_terminal_prices_positive_and_finite(
        n_paths in 1usize..200,
        n_steps in 1usize..20,
        spot in 1.0f64..500.0,
        drift in -0.1f64..0.2,
        vol in 0.0f64..1.0,
        maturity in 0.01f64..5.0,
        seed in any::<u64>(),
    ) {
        let terminals = simulate_paths(&config(n_paths, n_steps, spot, drift, vol, maturity, seed));
        prop_assert_eq!(terminals.len(), n_paths);
        for s in terminals {
            prop_assert!(s > 0.0 && s.is_finite());
        }
    }

    #[test]
    fn prop_full_paths_end_at_terminal_prices(
        n_paths in 1usize..100,
        n_steps in 1usize..10,
        vol in 0.01f64..0.8,
        seed in any::<u64>(),
    ) {
        let cfg = config(n_paths, n_steps, 100.0, 0.05, vol, 1.0, seed);
        let full = simulate_full_paths(&cfg);

        prop_assert_eq!(full.terminal_prices(), simulate_paths(&cfg));
        for path in full.paths() {
            prop_assert_eq!(path.len(), n_steps + 1);
            prop_assert_eq!(path[0], 100.0);
        }
    }
}
