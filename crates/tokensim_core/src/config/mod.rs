//! Simulation configuration
//!
//! `SimulationConfig` holds everything the engine needs. `ParameterInput`
//! carries the same values as raw strings (as typed into a form) and parses
//! them into a config.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, FormatError, ValidationError};

mod range;

pub use range::ValuationRange;

/// Number of independent runs per engine invocation unless overridden
pub const DEFAULT_RUN_COUNT: usize = 10;

/// Upper bound on iterations per run
pub const MAX_ITERATIONS: i64 = 100_000;

/// Upper bound on runs per invocation
pub const MAX_RUN_COUNT: usize = 10_000;

fn default_initial_tokens() -> u64 {
    735
}

fn default_max_iterations() -> i64 {
    3
}

fn default_gap() -> f64 {
    5.0
}

fn default_run_count() -> usize {
    DEFAULT_RUN_COUNT
}

/// Complete simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Tokens held at the start of every run
    #[serde(default = "default_initial_tokens")]
    pub initial_tokens: u64,

    /// Range the starting valuation of each run is drawn from
    #[serde(default)]
    pub valuation_range: ValuationRange,

    /// Iterations per run. Zero or negative produces no rows.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: i64,

    /// Valuation step added after every iteration; also the width of the
    /// sell valuation window
    #[serde(default = "default_gap")]
    pub gap: f64,

    #[serde(default = "default_run_count")]
    pub run_count: usize,

    /// Pin the sell percentage instead of drawing it per run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sell_percentage: Option<f64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_tokens: default_initial_tokens(),
            valuation_range: ValuationRange::default(),
            max_iterations: default_max_iterations(),
            gap: default_gap(),
            run_count: default_run_count(),
            sell_percentage: None,
        }
    }
}

impl SimulationConfig {
    /// Check every domain constraint before any sampling happens
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.initial_tokens == 0 {
            return Err(ValidationError::NoTokens);
        }
        self.valuation_range.validate()?;
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(ValidationError::NegativeGap(self.gap));
        }
        if !(self.valuation_range.max + self.gap).is_finite() {
            return Err(ValidationError::ValuationOverflow {
                max: self.valuation_range.max,
                gap: self.gap,
            });
        }
        if self.max_iterations > MAX_ITERATIONS {
            return Err(ValidationError::TooManyIterations {
                requested: self.max_iterations,
                limit: MAX_ITERATIONS,
            });
        }
        if self.run_count > MAX_RUN_COUNT {
            return Err(ValidationError::TooManyRuns {
                requested: self.run_count,
                limit: MAX_RUN_COUNT,
            });
        }
        if let Some(pct) = self.sell_percentage
            && !(0.0..=1.0).contains(&pct)
        {
            return Err(ValidationError::SellPercentageOutOfRange(pct));
        }
        Ok(())
    }

    /// Iterations actually executed per run
    pub fn iterations_per_run(&self) -> usize {
        self.max_iterations.max(0) as usize
    }

    /// Upper bound on rows one invocation produces
    pub fn expected_rows(&self) -> usize {
        self.iterations_per_run().saturating_mul(self.run_count)
    }
}

/// User-entered parameters before parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInput {
    pub tokens: String,
    pub valuation_range: String,
    pub max_iterations: String,
    pub gap: String,
}

impl ParameterInput {
    /// Parse into a config, taking values without an input field
    /// (`run_count`, `sell_percentage`) from `base`
    pub fn parse(&self, base: &SimulationConfig) -> Result<SimulationConfig, ConfigError> {
        let valuation_range = self.valuation_range.trim().parse::<ValuationRange>()?;
        let initial_tokens = parse_number::<u64>("token count", &self.tokens)?;
        let max_iterations = parse_number::<i64>("max iterations", &self.max_iterations)?;
        let gap = parse_number::<f64>("sell gap", &self.gap)?;

        let config = SimulationConfig {
            initial_tokens,
            valuation_range,
            max_iterations,
            gap,
            ..base.clone()
        };
        config.validate()?;
        Ok(config)
    }
}

impl From<&SimulationConfig> for ParameterInput {
    fn from(config: &SimulationConfig) -> Self {
        Self {
            tokens: config.initial_tokens.to_string(),
            valuation_range: config.valuation_range.to_string(),
            max_iterations: config.max_iterations.to_string(),
            gap: config.gap.to_string(),
        }
    }
}

fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, FormatError> {
    value.trim().parse::<T>().map_err(|_| FormatError::Number {
        field,
        value: value.to_string(),
    })
}
