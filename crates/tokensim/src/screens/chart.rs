use crate::components::{Component, EventResult, KeyHint};
use crate::state::AppState;
use crate::util::format::{format_compact_currency, format_currency};
use crate::util::styles::{HELP_COLOR, HIGHLIGHT_COLOR, series_color};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
};
use tokensim_core::{ChartSeries, build_scatter};

/// Scatter of per-run profit against sell percentage
pub struct ChartScreen;

impl ChartScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ChartScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Legend entry: series label followed by its latest profit
fn legend_label(series: &ChartSeries) -> String {
    match series.points.last() {
        Some((_, y)) => format!("{}: {}", series.label, format_compact_currency(*y)),
        None => series.label.clone(),
    }
}

/// The results row selected on either tab, as a chart point with its label
fn selected_point(state: &AppState) -> Option<((f64, f64), String)> {
    let selected = state.results_state.selected;
    let row = state.results.rows().get(selected)?;
    let label = format!(
        "#{} {} at {}",
        selected + 1,
        format_currency(row.accumulative_value),
        row.sold_percentage_formatted()
    );
    Some(((row.sell_percentage, row.accumulative_value), label))
}

impl Component for ChartScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let row_count = state.results.len();
        match key.code {
            KeyCode::Char('m') => {
                state.chart_state.group_by = state.chart_state.group_by.toggle();
            }
            KeyCode::Char('j') | KeyCode::Down => state.results_state.select_next(row_count),
            KeyCode::Char('k') | KeyCode::Up => state.results_state.select_prev(),
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn key_hints(&self, _state: &AppState) -> &'static [KeyHint] {
        &[("j/k", "highlight row"), ("m", "grouping")]
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let group_by = state.chart_state.group_by;
        let scatter = build_scatter(&state.results, group_by);

        let mut title = format!(" PROFIT BY SELL % (series per {}) ", group_by.name());
        let clipped = scatter.clipped_count();
        if clipped > 0 {
            title.push_str(&format!("[{} above range] ", clipped));
        }
        let block = Block::default().borders(Borders::ALL).title(title);

        if scatter.series.is_empty() {
            let content = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  No results to plot. Press [r] to run a simulation.",
                    Style::default().fg(HELP_COLOR),
                )),
            ];
            frame.render_widget(Paragraph::new(content).block(block), area);
            return;
        }

        let highlight = selected_point(state);
        let highlight_data: Vec<(f64, f64)> = highlight.iter().map(|(p, _)| *p).collect();

        let mut datasets: Vec<Dataset> = scatter
            .series
            .iter()
            .enumerate()
            .map(|(i, series)| {
                Dataset::default()
                    .name(legend_label(series))
                    .marker(symbols::Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(series_color(i)))
                    .data(&series.points)
            })
            .collect();

        // Drawn last so it sits above the series markers
        if let Some((_, label)) = highlight {
            datasets.push(
                Dataset::default()
                    .name(label)
                    .marker(symbols::Marker::Block)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(HIGHLIGHT_COLOR))
                    .data(&highlight_data),
            );
        }

        let [x_min, x_max] = scatter.x_bounds;
        let x_labels = vec![Span::raw("0%"), Span::raw("50%"), Span::raw("100%")];

        let [y_min, y_max] = scatter.y_bounds;
        let y_labels = vec![
            Span::raw(format_compact_currency(y_min)),
            Span::raw(format_compact_currency((y_min + y_max) / 2.0)),
            Span::raw(format_compact_currency(y_max)),
        ];

        let x_axis = Axis::default()
            .title("Sell %".dark_gray())
            .bounds([x_min, x_max])
            .labels(x_labels);

        let y_axis = Axis::default()
            .title("Profit".dark_gray())
            .bounds([y_min, y_max])
            .labels(y_labels);

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis)
            .legend_position(Some(LegendPosition::TopLeft))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

        frame.render_widget(chart, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::run_simulation;
    use crossterm::event::KeyModifiers;
    use tokensim_core::{GroupBy, RunDraw};

    #[test]
    fn test_toggle_grouping() {
        let mut screen = ChartScreen::new();
        let mut state = AppState::default();
        let key = KeyEvent::new(KeyCode::Char('m'), KeyModifiers::NONE);

        assert_eq!(screen.handle_key(key, &mut state), EventResult::Handled);
        assert_eq!(state.chart_state.group_by, GroupBy::Tokens);
        screen.handle_key(key, &mut state);
        assert_eq!(state.chart_state.group_by, GroupBy::Run);
    }

    fn state_with_rows() -> AppState {
        let mut state = AppState::default();
        let mut draw = RunDraw {
            initial_valuation: 20.0,
            sell_percentage: 0.5,
            sell_valuation: 20.0,
        };
        run_simulation(&mut state, &mut draw);
        state
    }

    #[test]
    fn test_legend_shows_latest_value() {
        let series = ChartSeries {
            key: "50.00%@20.00".to_string(),
            label: "50.00% @ $20.00".to_string(),
            points: vec![(0.5, 7340.0), (0.5, 14700.0)],
        };
        assert_eq!(legend_label(&series), "50.00% @ $20.00: $15K");

        let empty = ChartSeries {
            points: Vec::new(),
            ..series
        };
        assert_eq!(legend_label(&empty), "50.00% @ $20.00");
    }

    #[test]
    fn test_selected_point_follows_results_row() {
        let mut state = AppState::default();
        assert!(selected_point(&state).is_none());

        state = state_with_rows();
        let ((x, y), label) = selected_point(&state).unwrap();
        assert_eq!((x, y), (0.5, 7340.0));
        assert_eq!(label, "#1 $7,340.00 at 50.00%");

        let mut screen = ChartScreen::new();
        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(screen.handle_key(key, &mut state), EventResult::Handled);
        let (_, label) = selected_point(&state).unwrap();
        assert!(label.starts_with("#2 "));
    }
}
