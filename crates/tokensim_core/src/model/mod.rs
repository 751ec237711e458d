mod results;
mod run;

pub use results::{IterationResult, ResultLog, simulation_id};
pub use run::{RunDraw, SimulationRun, round_cents};
