use crate::components::{Component, EventResult, KeyHint};
use crate::state::AppState;
use crate::util::format::{format_currency, format_tokens};
use crate::util::styles::{HEADER_COLOR, HELP_COLOR, POSITIVE_COLOR};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use tokensim_core::IterationResult;

const HEADERS: [&str; 10] = [
    "#", "ID", "Valuation", "Sold %", "Sold $", "Sold #", "Left #", "Profit", "Prospect",
    "Portfolio",
];

const WIDTHS: [Constraint; 10] = [
    Constraint::Length(5),
    Constraint::Min(16),
    Constraint::Length(11),
    Constraint::Length(8),
    Constraint::Length(13),
    Constraint::Length(8),
    Constraint::Length(8),
    Constraint::Length(13),
    Constraint::Length(13),
    Constraint::Length(13),
];

pub struct ResultsScreen {
    table_state: TableState,
    /// Visible data rows at the last render, used as the page size
    page_size: usize,
}

impl ResultsScreen {
    pub fn new() -> Self {
        Self {
            table_state: TableState::default(),
            page_size: 10,
        }
    }

    fn table_row(index: usize, row: &IterationResult) -> Row<'static> {
        Row::new(vec![
            Cell::from(index.to_string()).style(Style::default().fg(HELP_COLOR)),
            Cell::from(row.simulation_id.clone()),
            Cell::from(format_currency(row.valuation)),
            Cell::from(row.sold_percentage_formatted()),
            Cell::from(format_currency(row.sold_value)),
            Cell::from(format_tokens(row.sold_tokens)),
            Cell::from(format_tokens(row.remaining_tokens)),
            Cell::from(format_currency(row.accumulative_value))
                .style(Style::default().fg(POSITIVE_COLOR)),
            Cell::from(format_currency(row.remaining_value)),
            Cell::from(format_currency(row.total_value))
                .style(Style::default().add_modifier(Modifier::BOLD)),
        ])
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let results = &state.results;
        let line = if results.is_empty() {
            Line::from(Span::styled(
                " No results yet. Press [r] to run a simulation.",
                Style::default().fg(HELP_COLOR),
            ))
        } else {
            Line::from(vec![
                Span::styled(" Rows: ", Style::default().fg(HELP_COLOR)),
                Span::raw(results.len().to_string()),
                Span::styled("   Runs: ", Style::default().fg(HELP_COLOR)),
                Span::raw(results.run_count().to_string()),
                Span::styled("   Selected: ", Style::default().fg(HELP_COLOR)),
                Span::raw(format!("{}", state.results_state.selected + 1)),
            ])
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let header = Row::new(HEADERS).style(
            Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = state
            .results
            .iter()
            .enumerate()
            .map(|(i, row)| Self::table_row(i + 1, row))
            .collect();

        let table = Table::new(rows, WIDTHS)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(" RESULTS "))
            .row_highlight_style(Style::default().bg(Color::DarkGray))
            .column_spacing(1);

        // Borders and header line
        self.page_size = (area.height as usize).saturating_sub(3).max(1);

        if state.results.is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(state.results_state.selected));
        }
        frame.render_stateful_widget(table, area, &mut self.table_state);
    }
}

impl Default for ResultsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ResultsScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let row_count = state.results.len();
        let results_state = &mut state.results_state;

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => results_state.select_next(row_count),
            KeyCode::Char('k') | KeyCode::Up => results_state.select_prev(),
            KeyCode::PageDown => results_state.page_down(row_count, self.page_size),
            KeyCode::PageUp => results_state.page_up(self.page_size),
            KeyCode::Char('g') | KeyCode::Home => results_state.selected = 0,
            KeyCode::Char('G') | KeyCode::End => results_state.select_last(row_count),
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn key_hints(&self, _state: &AppState) -> &'static [KeyHint] {
        &[("j/k", "scroll"), ("g/G", "top/bottom")]
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(3)])
            .split(area);

        self.render_summary(frame, chunks[0], state);
        self.render_table(frame, chunks[1], state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tokensim_core::{RunDraw, SimulationConfig, append_simulations};

    fn state_with_rows() -> AppState {
        let mut state = AppState::default();
        let mut draw = RunDraw {
            initial_valuation: 20.0,
            sell_percentage: 0.5,
            sell_valuation: 20.0,
        };
        append_simulations(&SimulationConfig::default(), &mut draw, &mut state.results).unwrap();
        state
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_scroll_keys() {
        let mut screen = ResultsScreen::new();
        let mut state = state_with_rows();

        screen.handle_key(press(KeyCode::Char('j')), &mut state);
        screen.handle_key(press(KeyCode::Char('j')), &mut state);
        assert_eq!(state.results_state.selected, 2);

        screen.handle_key(press(KeyCode::Char('k')), &mut state);
        assert_eq!(state.results_state.selected, 1);

        screen.handle_key(press(KeyCode::Char('G')), &mut state);
        assert_eq!(state.results_state.selected, 29);
        screen.handle_key(press(KeyCode::Char('j')), &mut state);
        assert_eq!(state.results_state.selected, 29);

        screen.handle_key(press(KeyCode::PageUp), &mut state);
        assert_eq!(state.results_state.selected, 19);

        screen.handle_key(press(KeyCode::Char('g')), &mut state);
        assert_eq!(state.results_state.selected, 0);
    }

    #[test]
    fn test_scroll_on_empty_log() {
        let mut screen = ResultsScreen::new();
        let mut state = AppState::default();

        screen.handle_key(press(KeyCode::Char('j')), &mut state);
        screen.handle_key(press(KeyCode::PageDown), &mut state);
        screen.handle_key(press(KeyCode::Char('G')), &mut state);
        assert_eq!(state.results_state.selected, 0);
    }
}
