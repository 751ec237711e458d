//! Run sampling and the per-run sell loop

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::SimulationConfig;
use crate::error::ConfigError;
use crate::model::{IterationResult, ResultLog, RunDraw, SimulationRun, round_cents, simulation_id};

/// Rows reserved up front; larger batches grow as they go
const PREALLOCATE_ROWS: usize = 4096;

/// Source of the per-run random draws
pub trait RunSampler {
    fn draw(&mut self, config: &SimulationConfig) -> RunDraw;
}

/// Uniform sampling backed by any `Rng`
pub struct RandomSampler<R> {
    rng: R,
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSampler<SmallRng> {
    pub fn from_os_rng() -> Self {
        Self::new(SmallRng::from_os_rng())
    }
}

impl<R: Rng> RunSampler for RandomSampler<R> {
    fn draw(&mut self, config: &SimulationConfig) -> RunDraw {
        let range = config.valuation_range;
        let initial_valuation = self.rng.random_range(range.min..=range.max);

        let sell_percentage = match config.sell_percentage {
            Some(pct) => pct,
            None => self.rng.random_range(0.0..=1.0),
        };

        let sell_valuation = round_cents(
            self.rng
                .random_range(initial_valuation..=initial_valuation + config.gap),
        );

        RunDraw {
            initial_valuation,
            sell_percentage,
            sell_valuation,
        }
    }
}

/// A fixed draw reused for every run
impl RunSampler for RunDraw {
    fn draw(&mut self, _config: &SimulationConfig) -> RunDraw {
        *self
    }
}

/// Iterate a single run. Deterministic given the run's draw.
pub fn simulate_run(run: &SimulationRun, run_number: usize) -> Vec<IterationResult> {
    let iterations = run.max_iterations.max(0) as usize;
    let mut rows = Vec::with_capacity(iterations.min(PREALLOCATE_ROWS));

    let mut current_tokens = run.initial_tokens;
    let mut current_valuation = run.initial_valuation;
    let mut accumulative_value = 0.0;

    for iteration in 1..=iterations {
        // Only whole tokens are sold; the remainder carries to the next step
        let sold_tokens =
            ((current_tokens as f64 * run.sell_percentage).floor() as u64).min(current_tokens);
        let remaining_tokens = current_tokens - sold_tokens;

        let sold_value = sold_tokens as f64 * run.sell_valuation;
        let remaining_value = remaining_tokens as f64 * current_valuation;
        accumulative_value += sold_value;

        rows.push(IterationResult {
            run: run_number,
            iteration,
            simulation_id: simulation_id(current_tokens, run.sell_percentage, run.sell_valuation),
            valuation: current_valuation,
            sell_percentage: run.sell_percentage,
            sell_valuation: run.sell_valuation,
            sold_tokens,
            remaining_tokens,
            sold_value,
            remaining_value,
            accumulative_value,
            total_value: accumulative_value + remaining_value,
        });

        current_valuation += run.gap;
        current_tokens = remaining_tokens;
    }

    rows
}

/// Validate `config`, then execute `config.run_count` independent runs.
///
/// Rows come back in run order, iterations ascending within each run.
pub fn run_simulations(
    config: &SimulationConfig,
    sampler: &mut impl RunSampler,
) -> Result<Vec<IterationResult>, ConfigError> {
    config.validate()?;

    let mut rows = Vec::with_capacity(config.expected_rows().min(PREALLOCATE_ROWS));
    for run_number in 1..=config.run_count {
        let run = SimulationRun::new(config, sampler.draw(config));
        rows.extend(simulate_run(&run, run_number));
    }

    Ok(rows)
}

/// Run the simulations and append the rows to `log`, returning how many
/// were added. Nothing is appended on error.
pub fn append_simulations(
    config: &SimulationConfig,
    sampler: &mut impl RunSampler,
    log: &mut ResultLog,
) -> Result<usize, ConfigError> {
    let rows = run_simulations(config, sampler)?;
    let added = rows.len();
    log.extend(rows);
    Ok(added)
}
