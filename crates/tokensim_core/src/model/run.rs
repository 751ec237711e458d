use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;

/// Round to two decimal places
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The random values drawn once at the start of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunDraw {
    pub initial_valuation: f64,
    pub sell_percentage: f64,
    /// Already rounded to cents
    pub sell_valuation: f64,
}

/// One full trial: starting state plus the parameters held fixed for every
/// iteration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    pub initial_tokens: u64,
    pub initial_valuation: f64,
    pub sell_percentage: f64,
    pub sell_valuation: f64,
    pub gap: f64,
    pub max_iterations: i64,
}

impl SimulationRun {
    pub fn new(config: &SimulationConfig, draw: RunDraw) -> Self {
        Self {
            initial_tokens: config.initial_tokens,
            initial_valuation: draw.initial_valuation,
            sell_percentage: draw.sell_percentage,
            sell_valuation: draw.sell_valuation,
            gap: config.gap,
            max_iterations: config.max_iterations,
        }
    }

    pub fn draw(&self) -> RunDraw {
        RunDraw {
            initial_valuation: self.initial_valuation,
            sell_percentage: self.sell_percentage,
            sell_valuation: self.sell_valuation,
        }
    }
}
