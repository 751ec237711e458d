use super::{Component, EventResult, KeyHint};
use crate::modals::HelpText;
use crate::state::AppState;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Keys available whenever no field is being edited
pub const GLOBAL_HINTS: &[KeyHint] = &[
    ("r", "run"),
    ("e", "export CSV"),
    ("x", "reset inputs"),
    ("1-2", "tabs"),
    ("q", "quit"),
];

/// Bottom line: the last error, or the keys that currently do something
pub struct StatusBar {
    hints: Vec<KeyHint>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self { hints: Vec::new() }
    }

    /// Replace the hints shown on the next render
    pub fn set_hints(&mut self, hints: impl IntoIterator<Item = KeyHint>) {
        self.hints.clear();
        self.hints.extend(hints);
    }

    pub fn hints(&self) -> &[KeyHint] {
        &self.hints
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default().borders(Borders::TOP);

        let paragraph = if let Some(error) = &state.error_message {
            Paragraph::new(Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.clone()),
                Span::styled("  (Esc to clear)", Style::default().fg(Color::DarkGray)),
            ]))
        } else {
            self.hints
                .iter()
                .fold(HelpText::new(), |help, (key, desc)| {
                    help.key(key, Color::Yellow, desc)
                })
                .build()
        };

        frame.render_widget(paragraph.block(block), area);
    }
}
