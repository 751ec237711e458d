//! Properties every emitted row must satisfy, checked over many seeded runs

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::{SimulationConfig, ValuationRange};
use crate::model::IterationResult;
use crate::simulation::{RandomSampler, run_simulations};

fn sample_rows(seed: u64, config: &SimulationConfig) -> Vec<IterationResult> {
    let mut sampler = RandomSampler::new(SmallRng::seed_from_u64(seed));
    run_simulations(config, &mut sampler).unwrap()
}

fn configs() -> Vec<SimulationConfig> {
    vec![
        SimulationConfig::default(),
        SimulationConfig {
            initial_tokens: 1,
            max_iterations: 4,
            ..Default::default()
        },
        SimulationConfig {
            initial_tokens: 1_000_000,
            valuation_range: ValuationRange::new(0.01, 500.0),
            gap: 0.0,
            max_iterations: 12,
            ..Default::default()
        },
        SimulationConfig {
            initial_tokens: 9_999,
            valuation_range: ValuationRange::new(3.0, 3.0),
            gap: 0.25,
            max_iterations: 30,
            run_count: 25,
            ..Default::default()
        },
    ]
}

fn for_each_run(check: impl Fn(&[IterationResult])) {
    for config in configs() {
        let iterations = config.iterations_per_run();
        for seed in 0..40 {
            let rows = sample_rows(seed, &config);
            assert_eq!(rows.len(), config.expected_rows());
            for run in rows.chunks(iterations) {
                check(run);
            }
        }
    }
}

#[test]
fn test_sold_plus_remaining_is_starting_tokens() {
    for_each_run(|run| {
        for row in run {
            assert_eq!(row.sold_tokens + row.remaining_tokens, row.tokens_at_start());
            assert!(row.sold_tokens <= row.tokens_at_start());
        }
    });
}

#[test]
fn test_accumulative_value_never_decreases() {
    for_each_run(|run| {
        for pair in run.windows(2) {
            assert!(pair[1].accumulative_value >= pair[0].accumulative_value);
            if pair[1].sold_value > 0.0 {
                assert!(pair[1].accumulative_value > pair[0].accumulative_value);
            }
        }
        assert_eq!(run[0].accumulative_value, run[0].sold_value);
    });
}

#[test]
fn test_total_is_accumulated_plus_remaining() {
    for_each_run(|run| {
        for row in run {
            assert_eq!(row.total_value, row.accumulative_value + row.remaining_value);
        }
    });
}

#[test]
fn test_token_count_never_increases() {
    for_each_run(|run| {
        for pair in run.windows(2) {
            assert_eq!(pair[1].tokens_at_start(), pair[0].remaining_tokens);
            assert!(pair[1].tokens_at_start() <= pair[0].tokens_at_start());
        }
    });
}

#[test]
fn test_valuation_steps_by_gap() {
    for config in configs() {
        let rows = sample_rows(3, &config);
        for run in rows.chunks(config.iterations_per_run()) {
            for pair in run.windows(2) {
                let step = pair[1].valuation - pair[0].valuation;
                assert!((step - config.gap).abs() < 1e-9);
            }
        }
    }
}
