use super::{Component, EventResult, KeyHint};
use crate::modals::{calculate_scroll, render_cursor_line};
use crate::state::{AppState, ParameterField};
use crate::util::format::format_percentage;
use crate::util::styles::{EDIT_COLOR, HELP_COLOR, focused_block};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// The four simulation inputs, side by side
pub struct ParametersPanel;

impl ParametersPanel {
    pub fn new() -> Self {
        Self
    }

    fn handle_editing_key(key: KeyEvent, state: &mut AppState) -> EventResult {
        let params = &mut state.parameters;
        match key.code {
            KeyCode::Enter | KeyCode::Esc => params.stop_editing(),
            KeyCode::Tab => {
                params.stop_editing();
                params.focus_next();
            }
            KeyCode::BackTab => {
                params.stop_editing();
                params.focus_prev();
            }
            KeyCode::Backspace => params.backspace(),
            KeyCode::Delete => params.delete(),
            KeyCode::Left => params.move_cursor_left(),
            KeyCode::Right => params.move_cursor_right(),
            KeyCode::Home => params.move_cursor_home(),
            KeyCode::End => params.move_cursor_end(),
            KeyCode::Char(c) => {
                params.insert_char(c);
            }
            _ => {}
        }
        // Swallow everything so global shortcuts don't fire mid-edit
        EventResult::Handled
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, state: &AppState, field: ParameterField) {
        let params = &state.parameters;
        let focused = params.focused == field;
        let editing = focused && params.editing;

        let mut block = focused_block(&format!(" {} ", field.label()), focused);
        if editing {
            block = block.border_style(Style::default().fg(EDIT_COLOR));
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let value = params.value(field);
        let line = if editing {
            let scrolled = calculate_scroll(value, params.cursor_pos, inner.width as usize);
            render_cursor_line(&scrolled.display_value, scrolled.cursor_pos, " ")
        } else {
            Line::from(format!(" {}", value))
        };
        frame.render_widget(Paragraph::new(line), inner);
    }
}

impl Default for ParametersPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ParametersPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if state.parameters.editing {
            return Self::handle_editing_key(key, state);
        }

        match key.code {
            KeyCode::Tab => {
                state.parameters.focus_next();
                EventResult::Handled
            }
            KeyCode::BackTab => {
                state.parameters.focus_prev();
                EventResult::Handled
            }
            KeyCode::Enter => {
                state.parameters.start_editing();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn key_hints(&self, state: &AppState) -> &'static [KeyHint] {
        if state.parameters.editing {
            &[("type", "edit"), ("Enter/Esc", "done"), ("←/→", "move cursor")]
        } else {
            &[("Tab", "next field"), ("Enter", "edit")]
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(rows[0]);

        for (field, column) in ParameterField::ALL.iter().zip(columns.iter()) {
            self.render_field(frame, *column, state, *field);
        }

        let base = &state.base_config;
        let mut info = format!(
            " {} runs per press of [r]  |  {} rows",
            base.run_count,
            state.results.len()
        );
        if let Some(pct) = base.sell_percentage {
            info.push_str(&format!("  |  sell percentage pinned at {}", format_percentage(pct)));
        }
        let info = Paragraph::new(Line::from(Span::styled(
            info,
            Style::default().fg(HELP_COLOR),
        )));
        frame.render_widget(info, rows[1]);
    }
}
