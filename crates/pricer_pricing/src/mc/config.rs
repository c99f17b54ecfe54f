//! Monte Carlo simulation configuration.
//!
//! This module provides [`SimulationConfig`] and its builder. A config is
//! validated once at build time and consumed by a single simulation call.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Path simulation configuration.
///
/// Immutable, validated configuration for geometric Brownian motion
/// paths. Use [`SimulationConfigBuilder`] to construct instances.
///
/// The drift is always an explicit input. For risk-neutral valuation it
/// must equal the cost of carry of the underlying (the risk-free rate for
/// a non-dividend stock); [`SimulationConfigBuilder::risk_neutral`] sets
/// it to `rate`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(10_000)
///     .n_steps(252)
///     .spot(100.0)
///     .rate(0.05)
///     .risk_neutral()
///     .volatility(0.2)
///     .maturity(1.0)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.drift(), 0.05);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    n_paths: usize,
    n_steps: usize,
    spot: f64,
    rate: f64,
    drift: f64,
    volatility: f64,
    maturity: f64,
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the initial price S₀.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the discount rate used by estimators.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the drift μ of the simulated process.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// Returns the volatility σ.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the horizon T in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the step size T / n_steps.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.maturity / self.n_steps as f64
    }

    /// Returns a copy with a different seed.
    ///
    /// Used to run repeated trials over the same parameters.
    #[inline]
    pub fn with_seed(&self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self.clone()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than 10,000,000
    /// - `n_steps` is 0 or greater than 10,000
    /// - `spot` or `maturity` is not strictly positive
    /// - `volatility` is negative
    /// - any floating-point field is NaN or infinite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }

        for (name, value) in [
            ("spot", self.spot),
            ("rate", self.rate),
            ("drift", self.drift),
            ("volatility", self.volatility),
            ("maturity", self.maturity),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidParameter {
                    name,
                    value: format!("must be finite, got {}", value),
                });
            }
        }

        if self.spot <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "spot",
                value: format!("must be positive, got {}", self.spot),
            });
        }
        if self.volatility < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "volatility",
                value: format!("must be non-negative, got {}", self.volatility),
            });
        }
        if self.maturity <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "maturity",
                value: format!("must be positive, got {}", self.maturity),
            });
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// `n_paths`, `n_steps`, `spot`, `volatility`, `maturity` and the drift
/// (via [`drift`](Self::drift) or [`risk_neutral`](Self::risk_neutral)) are
/// required; `rate` defaults to zero and `seed` to none.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    spot: Option<f64>,
    rate: f64,
    drift: Option<f64>,
    risk_neutral: bool,
    volatility: Option<f64>,
    maturity: Option<f64>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of simulation paths, in [1, 10_000_000].
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path, in [1, 10_000].
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the initial price.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the discount rate.
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Sets an explicit drift. Overrides a previous [`risk_neutral`](Self::risk_neutral).
    #[inline]
    pub fn drift(mut self, drift: f64) -> Self {
        self.drift = Some(drift);
        self.risk_neutral = false;
        self
    }

    /// Uses the discount rate as the drift. Overrides a previous [`drift`](Self::drift).
    #[inline]
    pub fn risk_neutral(mut self) -> Self {
        self.drift = None;
        self.risk_neutral = true;
        self
    }

    /// Sets the volatility.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the horizon in years.
    #[inline]
    pub fn maturity(mut self, maturity: f64) -> Self {
        self.maturity = Some(maturity);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` for a missing required field,
    /// otherwise any error from [`SimulationConfig::validate`].
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let n_paths = required("n_paths", self.n_paths)?;
        let n_steps = required("n_steps", self.n_steps)?;
        let spot = required("spot", self.spot)?;
        let volatility = required("volatility", self.volatility)?;
        let maturity = required("maturity", self.maturity)?;
        let drift = if self.risk_neutral {
            self.rate
        } else {
            self.drift.ok_or(ConfigError::InvalidParameter {
                name: "drift",
                value: "must be specified (use risk_neutral() for drift = rate)".to_string(),
            })?
        };

        let config = SimulationConfig {
            n_paths,
            n_steps,
            spot,
            rate: self.rate,
            drift,
            volatility,
            maturity,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

fn required<T>(name: &'static str, value: Option<T>) -> Result<T, ConfigError> {
    value.ok_or(ConfigError::InvalidParameter {
        name,
        value: "must be specified".to_string(),
    })
}
