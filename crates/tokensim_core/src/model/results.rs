use serde::{Deserialize, Serialize};

/// Build the identifier shown for a row: `{tokens}_{percent}@{valuation}`
///
/// `percent` is the sell percentage scaled to 0..=100 and truncated.
pub fn simulation_id(tokens: u64, sell_percentage: f64, sell_valuation: f64) -> String {
    format!(
        "{}_{}@{}",
        tokens,
        percent_int(sell_percentage),
        sell_valuation
    )
}

fn percent_int(sell_percentage: f64) -> u64 {
    (sell_percentage * 100.0).floor() as u64
}

/// One row emitted per iteration of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationResult {
    /// 1-based run number within the invocation that produced the row
    pub run: usize,
    /// 1-based iteration within the run
    pub iteration: usize,
    pub simulation_id: String,
    /// Market valuation during this iteration
    pub valuation: f64,
    pub sell_percentage: f64,
    pub sell_valuation: f64,
    pub sold_tokens: u64,
    pub remaining_tokens: u64,
    pub sold_value: f64,
    /// Market value of the unsold tokens ("prospect")
    pub remaining_value: f64,
    /// Proceeds of every sale in the run so far ("profit")
    pub accumulative_value: f64,
    /// `accumulative_value + remaining_value` ("portfolio")
    pub total_value: f64,
}

impl IterationResult {
    pub fn tokens_at_start(&self) -> u64 {
        self.sold_tokens + self.remaining_tokens
    }

    pub fn sold_percentage_formatted(&self) -> String {
        format!("{:.2}%", self.sell_percentage * 100.0)
    }

    /// The `{percent}@{valuation}` suffix of the id, constant across a run
    pub fn run_key(&self) -> &str {
        self.simulation_id
            .split_once('_')
            .map_or(self.simulation_id.as_str(), |(_, rest)| rest)
    }

    /// The token-count prefix of the id
    pub fn token_key(&self) -> &str {
        self.simulation_id
            .split_once('_')
            .map_or(self.simulation_id.as_str(), |(tokens, _)| tokens)
    }
}

/// Caller-owned accumulation of rows across engine invocations
///
/// Rows are only ever appended; nothing removes them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultLog {
    rows: Vec<IterationResult>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: IterationResult) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[IterationResult] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IterationResult> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of runs that produced at least one row
    pub fn run_count(&self) -> usize {
        self.rows.iter().filter(|row| row.iteration == 1).count()
    }
}

impl Extend<IterationResult> for ResultLog {
    fn extend<T: IntoIterator<Item = IterationResult>>(&mut self, iter: T) {
        self.rows.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ResultLog {
    type Item = &'a IterationResult;
    type IntoIter = std::slice::Iter<'a, IterationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
