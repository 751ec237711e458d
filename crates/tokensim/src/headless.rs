//! One-shot export without the terminal UI

use std::path::Path;

use color_eyre::eyre::WrapErr;
use tokensim_core::{RandomSampler, RunSampler, SimulationConfig, run_simulations};

use crate::export::write_csv;

/// Run one batch of simulations and write it to `path`, returning the number
/// of rows written
pub fn export_batch(
    config: &SimulationConfig,
    sampler: &mut impl RunSampler,
    path: &Path,
) -> color_eyre::Result<usize> {
    let rows = run_simulations(config, sampler).wrap_err("Invalid simulation parameters")?;
    let written = write_csv(path, &rows)
        .wrap_err_with(|| format!("Failed to export results to {}", path.display()))?;
    Ok(written)
}

pub fn run_headless(config: &SimulationConfig, path: &Path) -> color_eyre::Result<()> {
    tracing::info!(path = %path.display(), runs = config.run_count, "Headless export");

    let written = export_batch(config, &mut RandomSampler::from_os_rng(), path)?;

    println!(
        "Wrote {} rows ({} runs x {} iterations) to {}",
        written,
        config.run_count,
        config.iterations_per_run(),
        path.display()
    );
    Ok(())
}
