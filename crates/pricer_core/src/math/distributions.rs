//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function Φ
//! - `norm_pdf`: Probability density function φ
//!
//! Φ is evaluated through the complementary error function, so tail values
//! keep their relative precision instead of cancelling against 1.

use statrs::function::erf::erfc;

/// 1 / sqrt(2)
const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Accuracy
/// Absolute error below 3e-11 over the real line, bounded by the rational
/// approximation inside `statrs::function::erf::erfc`. `Φ(±∞)` evaluates to
/// 1 and 0.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.0) - 0.841_344_746_068_542_9).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0) - 0.3989422804).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_abs_diff_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        // High-precision reference values
        assert_abs_diff_eq!(norm_cdf(1.0), 0.841_344_746_068_542_9, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_cdf(-1.0), 0.158_655_253_931_457_05, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_cdf(2.0), 0.977_249_868_051_820_8, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_cdf(-2.0), 0.022_750_131_948_179_195, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_cdf(3.0), 0.998_650_101_968_369_9, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_cdf(-3.0), 0.001_349_898_031_630_094_6, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_cdf(0.5), 0.691_462_461_274_013_1, epsilon = 1e-10);
    }

    /// Φ from Marsaglia's series, accurate to a few ulps for |x| <= 12:
    /// Φ(x) = 1/2 + φ(x)·(x + x³/3 + x⁵/(3·5) + ...)
    fn norm_cdf_series(x: f64) -> f64 {
        if x < 0.0 {
            return 1.0 - norm_cdf_series(-x);
        }
        let x2 = x * x;
        let mut sum = x;
        let mut term = x;
        let mut n = 1.0;
        loop {
            term *= x2 / (2.0 * n + 1.0);
            n += 1.0;
            if sum + term == sum {
                break;
            }
            sum += term;
        }
        0.5 + norm_pdf(x) * sum
    }

    #[test]
    fn test_norm_cdf_dense_grid() {
        let mut worst = (0.0_f64, 0.0_f64);
        for i in -24_000..=24_000 {
            let x = i as f64 * 0.0005;
            let err = (norm_cdf(x) - norm_cdf_series(x)).abs();
            if err > worst.1 {
                worst = (x, err);
            }
        }
        assert!(worst.1 < 1e-10, "max error {:e} at x = {}", worst.1, worst.0);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        let test_values = [-6.0, -3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0, 6.0];
        for x in test_values {
            assert_abs_diff_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_cdf_deep_tail_keeps_precision() {
        // Φ(-8) ≈ 6.22e-16; a 1 - Φ(8) formulation would lose it entirely
        let tail = norm_cdf(-8.0);
        assert!(tail > 6.0e-16 && tail < 6.5e-16, "Φ(-8) = {}", tail);
    }

    #[test]
    fn test_norm_cdf_infinite_arguments() {
        assert_eq!(norm_cdf(f64::INFINITY), 1.0);
        assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let values: Vec<f64> = (-50..=50).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            assert!(
                norm_cdf(pair[1]) > norm_cdf(pair[0]),
                "CDF not monotonic at x = {}",
                pair[0]
            );
        }
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_abs_diff_eq!(norm_pdf(0.0), FRAC_1_SQRT_2PI, epsilon = 1e-15);
        assert_abs_diff_eq!(norm_pdf(1.0), 0.241_970_724_519_143_37, epsilon = 1e-14);
        assert_abs_diff_eq!(norm_pdf(2.0), 0.053_990_966_513_188_06, epsilon = 1e-14);
    }

    #[test]
    fn test_cdf_pdf_relationship() {
        // Central difference of Φ approximates φ
        let h = 1e-5;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let numerical = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_abs_diff_eq!(numerical, norm_pdf(x), epsilon = 1e-8);
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_norm_cdf_bounded(x in -40.0..40.0f64) {
                let p = norm_cdf(x);
                prop_assert!((0.0..=1.0).contains(&p));
            }
        }
    }
}
