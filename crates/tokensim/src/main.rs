use std::path::PathBuf;

use clap::Parser;
use tokensim::{App, AppConfig, headless, init_logging};
use tokensim_core::{SimulationConfig, ValuationRange};

#[derive(Parser, Debug)]
#[command(name = "tokensim")]
#[command(about = "Simulate staged token sales over a rising valuation")]
struct Args {
    /// Path to the data directory (default: ~/.tokensim/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Run once without the UI and write the results as CSV to this path
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Initial number of tokens
    #[arg(long)]
    tokens: Option<u64>,

    /// Initial valuation range, as "min-max"
    #[arg(long, value_name = "MIN-MAX")]
    range: Option<ValuationRange>,

    /// Iterations per run
    #[arg(long, allow_negative_numbers = true)]
    iterations: Option<i64>,

    /// Valuation increase between iterations
    #[arg(long)]
    gap: Option<f64>,

    /// Runs per simulation
    #[arg(long)]
    runs: Option<usize>,

    /// Use this sell percentage (0-1) for every run instead of drawing it
    #[arg(long)]
    sell_percentage: Option<f64>,
}

impl Args {
    /// Layer the command-line overrides on top of `config`
    fn apply(&self, config: &mut SimulationConfig) {
        if let Some(tokens) = self.tokens {
            config.initial_tokens = tokens;
        }
        if let Some(range) = self.range {
            config.valuation_range = range;
        }
        if let Some(iterations) = self.iterations {
            config.max_iterations = iterations;
        }
        if let Some(gap) = self.gap {
            config.gap = gap;
        }
        if let Some(runs) = self.runs {
            config.run_count = runs;
        }
        if self.sell_percentage.is_some() {
            config.sell_percentage = self.sell_percentage;
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tokensim")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let mut config = AppConfig::load_or_default(&data_dir);
    args.apply(&mut config.simulation);

    if let Some(path) = &args.export {
        return headless::run_headless(&config.simulation, path);
    }

    if let Err(e) = config.simulation.validate() {
        // Bad overrides land in the panel; the first run reports them
        tracing::warn!(error = %e, "Starting with invalid parameters");
    }

    let mut app = App::new(config);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
