use tokensim_core::{RunSampler, append_simulations};

use crate::state::AppState;

/// Parse the parameter panel and append a fresh batch of runs to the log.
///
/// On a parse or validation error the log is untouched and the error goes to
/// the status bar.
pub fn run_simulation(state: &mut AppState, sampler: &mut impl RunSampler) {
    let config = match state.parameters.parse(&state.base_config) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected simulation parameters");
            state.set_error(e.to_string());
            return;
        }
    };

    let first_new = state.results.len();
    match append_simulations(&config, sampler, &mut state.results) {
        Ok(added) => {
            tracing::info!(
                tokens = config.initial_tokens,
                range = %config.valuation_range,
                iterations = config.max_iterations,
                gap = config.gap,
                runs = config.run_count,
                rows = added,
                "Simulation complete"
            );
            if added > 0 {
                state.results_state.selected = first_new;
            }
            state.clear_error();
        }
        Err(e) => state.set_error(e.to_string()),
    }
}

/// Restore the parameter panel to the built-in defaults. Results are kept.
pub fn reset_inputs(state: &mut AppState) {
    state.parameters.reset();
    state.clear_error();
    tracing::debug!("Parameters reset to defaults");
}
