//! Scatter series extraction for the results chart.
//!
//! Each point is one result row: x is the run's sell percentage, y is the
//! row's own accumulative value. Points are grouped into series by a key
//! taken from the simulation id.

use rustc_hash::FxHashMap;

use crate::model::IterationResult;

/// Fixed vertical range of the chart
pub const Y_AXIS_MAX: f64 = 100_000.0;
/// Sell percentages are fractions
pub const X_AXIS_MAX: f64 = 1.0;

/// Which part of the simulation id identifies a series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GroupBy {
    /// `{percent}@{valuation}`: one series per run
    #[default]
    Run,
    /// `{tokens}`: rows that started with the same token count
    Tokens,
}

impl GroupBy {
    pub fn toggle(self) -> Self {
        match self {
            GroupBy::Run => GroupBy::Tokens,
            GroupBy::Tokens => GroupBy::Run,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GroupBy::Run => "run",
            GroupBy::Tokens => "token count",
        }
    }

    fn key(self, row: &IterationResult) -> &str {
        match self {
            GroupBy::Run => row.run_key(),
            GroupBy::Tokens => row.token_key(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub key: String,
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    /// Series in order of first appearance
    pub series: Vec<ChartSeries>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// Points that fall above the fixed y range
    pub fn clipped_count(&self) -> usize {
        self.series
            .iter()
            .flat_map(|s| &s.points)
            .filter(|(_, y)| *y > self.y_bounds[1])
            .count()
    }
}

fn series_label(group_by: GroupBy, row: &IterationResult) -> String {
    match group_by {
        GroupBy::Run => format!(
            "{} @ ${:.2}",
            row.sold_percentage_formatted(),
            row.sell_valuation
        ),
        GroupBy::Tokens => format!("{} tokens", row.token_key()),
    }
}

pub fn build_scatter<'a>(
    rows: impl IntoIterator<Item = &'a IterationResult>,
    group_by: GroupBy,
) -> ScatterChart {
    let mut series: Vec<ChartSeries> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();

    for row in rows {
        let key = group_by.key(row);
        let idx = match index.get(key) {
            Some(&idx) => idx,
            None => {
                series.push(ChartSeries {
                    key: key.to_string(),
                    label: series_label(group_by, row),
                    points: Vec::new(),
                });
                index.insert(key.to_string(), series.len() - 1);
                series.len() - 1
            }
        };
        series[idx]
            .points
            .push((row.sell_percentage, row.accumulative_value));
    }

    ScatterChart {
        series,
        x_bounds: [0.0, X_AXIS_MAX],
        y_bounds: [0.0, Y_AXIS_MAX],
    }
}
