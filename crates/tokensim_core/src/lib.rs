//! Token selling simulation library
//!
//! This crate provides the engine behind `tokensim`: a fixed number of
//! independent runs, each drawing a starting valuation, a sell percentage and
//! a sell valuation, then repeatedly selling that share of the remaining
//! tokens while the market valuation climbs by a fixed gap.
//!
//! It also renders result rows as CSV and groups them into scatter series for
//! charting. Nothing here performs I/O.
//!
//! ```ignore
//! use tokensim_core::{RandomSampler, SimulationConfig, run_simulations};
//!
//! let config = SimulationConfig::default();
//! let rows = run_simulations(&config, &mut RandomSampler::from_os_rng())?;
//! println!("{}", tokensim_core::export::to_csv(&rows));
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod chart;
pub mod error;
pub mod export;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use chart::{ChartSeries, GroupBy, ScatterChart, build_scatter};
pub use config::{
    DEFAULT_RUN_COUNT, MAX_ITERATIONS, MAX_RUN_COUNT, ParameterInput, SimulationConfig,
    ValuationRange,
};
pub use error::{ConfigError, FormatError, ValidationError};
pub use model::{IterationResult, ResultLog, RunDraw, SimulationRun};
pub use simulation::{RandomSampler, RunSampler, append_simulations, run_simulations, simulate_run};
