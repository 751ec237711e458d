//! Tests for run sequencing, sampling and error handling

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::{ParameterInput, SimulationConfig, ValuationRange};
use crate::error::{ConfigError, FormatError, ValidationError};
use crate::model::{ResultLog, RunDraw, SimulationRun};
use crate::simulation::{
    RandomSampler, RunSampler, append_simulations, run_simulations, simulate_run,
};

fn seeded(seed: u64) -> RandomSampler<SmallRng> {
    RandomSampler::new(SmallRng::seed_from_u64(seed))
}

/// 735 tokens, half sold at 20.00 while the market is at 20.00
#[test]
fn test_single_iteration_example() {
    let run = SimulationRun {
        initial_tokens: 735,
        initial_valuation: 20.0,
        sell_percentage: 0.5,
        sell_valuation: 20.0,
        gap: 5.0,
        max_iterations: 1,
    };

    let rows = simulate_run(&run, 1);
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.iteration, 1);
    assert_eq!(row.simulation_id, "735_50@20");
    assert_eq!(row.sold_tokens, 367);
    assert_eq!(row.remaining_tokens, 368);
    assert_eq!(row.sold_value, 7340.0);
    assert_eq!(row.accumulative_value, 7340.0);
    assert_eq!(row.remaining_value, 7360.0);
    assert_eq!(row.total_value, 14700.0);
    assert_eq!(row.sold_percentage_formatted(), "50.00%");
}

#[test]
fn test_tokens_and_valuation_carry_forward() {
    let run = SimulationRun {
        initial_tokens: 735,
        initial_valuation: 20.0,
        sell_percentage: 0.5,
        sell_valuation: 20.0,
        gap: 5.0,
        max_iterations: 3,
    };

    let rows = simulate_run(&run, 7);
    let tokens: Vec<u64> = rows.iter().map(|r| r.tokens_at_start()).collect();
    let valuations: Vec<f64> = rows.iter().map(|r| r.valuation).collect();
    let iterations: Vec<usize> = rows.iter().map(|r| r.iteration).collect();

    assert_eq!(tokens, vec![735, 368, 184]);
    assert_eq!(valuations, vec![20.0, 25.0, 30.0]);
    assert_eq!(iterations, vec![1, 2, 3]);
    assert!(rows.iter().all(|r| r.run == 7));

    // Sell valuation is held for the whole run even as the market moves
    assert_eq!(rows[2].simulation_id, "184_50@20");
    assert_eq!(rows[2].sold_value, 92.0 * 20.0);
    assert_eq!(rows[2].remaining_value, 92.0 * 30.0);
    assert_eq!(rows[2].accumulative_value, 7340.0 + 3680.0 + 1840.0);
}

#[test]
fn test_zero_iterations_produce_no_rows() {
    let config = SimulationConfig {
        max_iterations: 0,
        ..Default::default()
    };
    let rows = run_simulations(&config, &mut seeded(1)).unwrap();
    assert!(rows.is_empty());

    let config = SimulationConfig {
        max_iterations: -4,
        ..Default::default()
    };
    let rows = run_simulations(&config, &mut seeded(1)).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_malformed_range_fails_before_rows() {
    let input = ParameterInput {
        tokens: "735".to_string(),
        valuation_range: "abc".to_string(),
        max_iterations: "3".to_string(),
        gap: "5".to_string(),
    };

    let mut log = ResultLog::new();
    let result = input
        .parse(&SimulationConfig::default())
        .and_then(|config| append_simulations(&config, &mut seeded(1), &mut log));

    assert_eq!(
        result,
        Err(ConfigError::Format(FormatError::ValuationRange(
            "abc".to_string()
        )))
    );
    assert!(log.is_empty());
}

#[test]
fn test_invalid_config_appends_nothing() {
    let mut log = ResultLog::new();
    let config = SimulationConfig {
        initial_tokens: 0,
        ..Default::default()
    };

    let result = append_simulations(&config, &mut seeded(3), &mut log);
    assert_eq!(result, Err(ConfigError::Validation(ValidationError::NoTokens)));
    assert!(log.is_empty());
}

#[test]
fn test_default_run_count() {
    let config = SimulationConfig::default();
    let rows = run_simulations(&config, &mut seeded(42)).unwrap();

    assert_eq!(rows.len(), 10 * 3);
    for (i, chunk) in rows.chunks(3).enumerate() {
        assert!(chunk.iter().all(|r| r.run == i + 1));
        let iterations: Vec<usize> = chunk.iter().map(|r| r.iteration).collect();
        assert_eq!(iterations, vec![1, 2, 3]);
    }
}

#[test]
fn test_append_accumulates_across_invocations() {
    let config = SimulationConfig {
        run_count: 2,
        max_iterations: 2,
        ..Default::default()
    };
    let mut sampler = seeded(9);
    let mut log = ResultLog::new();

    assert_eq!(append_simulations(&config, &mut sampler, &mut log), Ok(4));
    assert_eq!(append_simulations(&config, &mut sampler, &mut log), Ok(4));

    assert_eq!(log.len(), 8);
    assert_eq!(log.run_count(), 4);
    // Second invocation restarts run numbering
    assert_eq!(log.rows()[4].run, 1);
}

#[test]
fn test_draws_respect_ranges() {
    let config = SimulationConfig {
        valuation_range: ValuationRange::new(10.0, 12.0),
        gap: 3.0,
        ..Default::default()
    };
    let mut sampler = seeded(1234);

    for _ in 0..500 {
        let draw = sampler.draw(&config);
        assert!((10.0..=12.0).contains(&draw.initial_valuation));
        assert!((0.0..=1.0).contains(&draw.sell_percentage));

        // Rounding to cents can push the value just past the window edges
        assert!(draw.sell_valuation >= draw.initial_valuation - 0.005);
        assert!(draw.sell_valuation <= draw.initial_valuation + 3.0 + 0.005);
        assert_eq!(draw.sell_valuation, (draw.sell_valuation * 100.0).round() / 100.0);
    }
}

#[test]
fn test_draw_is_held_for_every_iteration() {
    let config = SimulationConfig {
        max_iterations: 5,
        run_count: 3,
        ..Default::default()
    };
    let rows = run_simulations(&config, &mut seeded(77)).unwrap();

    for run in rows.chunks(5) {
        let first = &run[0];
        assert!(run.iter().all(|r| r.sell_percentage == first.sell_percentage));
        assert!(run.iter().all(|r| r.sell_valuation == first.sell_valuation));
        assert!(run.iter().all(|r| r.run_key() == first.run_key()));
    }
}

#[test]
fn test_zero_gap_degenerate_window() {
    let config = SimulationConfig {
        valuation_range: ValuationRange::new(15.0, 15.0),
        gap: 0.0,
        ..Default::default()
    };
    let draw = seeded(5).draw(&config);
    assert_eq!(draw.initial_valuation, 15.0);
    assert_eq!(draw.sell_valuation, 15.0);

    let rows = run_simulations(&config, &mut seeded(5)).unwrap();
    assert!(rows.iter().all(|r| r.valuation == 15.0));
}

#[test]
fn test_pinned_sell_percentage() {
    let config = SimulationConfig {
        sell_percentage: Some(0.5),
        ..Default::default()
    };
    let rows = run_simulations(&config, &mut seeded(11)).unwrap();

    assert!(rows.iter().all(|r| r.sell_percentage == 0.5));
    assert!(rows.iter().all(|r| r.simulation_id.contains("_50@")));
}

#[test]
fn test_fixed_draw_sampler() {
    let mut draw = RunDraw {
        initial_valuation: 20.0,
        sell_percentage: 1.0,
        sell_valuation: 21.0,
    };
    let config = SimulationConfig {
        run_count: 2,
        ..Default::default()
    };
    let rows = run_simulations(&config, &mut draw).unwrap();

    // Selling everything leaves nothing for later iterations
    assert_eq!(rows[0].sold_tokens, 735);
    assert_eq!(rows[0].remaining_tokens, 0);
    assert_eq!(rows[1].sold_tokens, 0);
    assert_eq!(rows[1].sold_value, 0.0);
    assert_eq!(rows[1].accumulative_value, rows[0].accumulative_value);
    assert_eq!(rows[1].simulation_id, "0_100@21");
}

#[test]
fn test_same_seed_same_rows() {
    let config = SimulationConfig::default();
    let a = run_simulations(&config, &mut seeded(8)).unwrap();
    let b = run_simulations(&config, &mut seeded(8)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_huge_iteration_count_rejected_before_rows() {
    let input = ParameterInput {
        tokens: "735".to_string(),
        valuation_range: "18.67-20.67".to_string(),
        max_iterations: i64::MAX.to_string(),
        gap: "5".to_string(),
    };
    let err = input.parse(&SimulationConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Validation(ValidationError::TooManyIterations { .. })
    ));

    // Configs built directly are checked the same way by the engine
    let config = SimulationConfig {
        max_iterations: i64::MAX,
        ..Default::default()
    };
    let mut log = ResultLog::new();
    assert!(append_simulations(&config, &mut seeded(2), &mut log).is_err());
    assert!(log.is_empty());
}

#[test]
fn test_iteration_limit_runs_to_completion() {
    let config = SimulationConfig {
        initial_tokens: 1_000_000,
        max_iterations: crate::config::MAX_ITERATIONS,
        run_count: 1,
        ..Default::default()
    };
    let rows = run_simulations(&config, &mut seeded(4)).unwrap();
    assert_eq!(rows.len(), crate::config::MAX_ITERATIONS as usize);
}

#[test]
fn test_unbounded_sell_window_rejected() {
    let input = ParameterInput {
        tokens: "735".to_string(),
        valuation_range: "1e308-1e308".to_string(),
        max_iterations: "3".to_string(),
        gap: "1e308".to_string(),
    };
    let err = input.parse(&SimulationConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Validation(ValidationError::ValuationOverflow { .. })
    ));

    let config = SimulationConfig {
        valuation_range: ValuationRange::new(1e308, 1e308),
        gap: 1e308,
        ..Default::default()
    };
    assert!(run_simulations(&config, &mut seeded(6)).is_err());
}
