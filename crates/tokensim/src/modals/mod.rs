//! Overlays drawn above the screens: the export prompt and its outcome.

mod export_prompt;
mod helpers;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Color,
    widgets::{Paragraph, Wrap},
};

use crate::state::{AppState, MessageModal, ModalState};

pub use helpers::{HelpText, calculate_scroll, render_cursor_line};

use helpers::render_modal_frame;

/// What a key press inside an overlay asks the app to do
#[derive(Debug, PartialEq, Eq)]
pub enum ModalResult {
    /// Still open
    Continue,
    /// Close without doing anything
    Dismissed,
    /// Write the result log to this path
    Export(String),
}

pub fn render_modal(frame: &mut Frame, state: &AppState) {
    match &state.modal {
        ModalState::None => {}
        ModalState::ExportPrompt(prompt) => export_prompt::render(frame, prompt),
        ModalState::Message(message) => render_message(frame, message),
    }
}

pub fn handle_modal_key(key: KeyEvent, state: &mut AppState) -> ModalResult {
    match &mut state.modal {
        ModalState::None => ModalResult::Continue,
        ModalState::ExportPrompt(prompt) => export_prompt::handle_key(key, prompt),
        ModalState::Message(_) => match key.code {
            KeyCode::Enter | KeyCode::Esc => ModalResult::Dismissed,
            _ => ModalResult::Continue,
        },
    }
}

/// Create a centered rectangle within the given area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

const MESSAGE_WIDTH: u16 = 56;

/// Export outcome: green for success, red for an I/O failure
fn render_message(frame: &mut Frame, message: &MessageModal) {
    // Paths can be long; give the wrapped text the rows it needs
    let text_width = (MESSAGE_WIDTH - 4) as usize;
    let text_rows = message.message.chars().count().div_ceil(text_width).max(1) as u16;
    let height = (text_rows + 5).min(frame.area().height);

    let border = if message.is_error {
        Color::Red
    } else {
        Color::Green
    };
    let mf = render_modal_frame(
        frame,
        &message.title,
        MESSAGE_WIDTH,
        height,
        border,
        &[
            Constraint::Min(1),    // Message
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Help text
        ],
    );

    frame.render_widget(
        Paragraph::new(message.message.as_str()).wrap(Wrap { trim: true }),
        mf.chunks[0],
    );
    frame.render_widget(
        HelpText::new().key("[Enter/Esc]", Color::Yellow, "close").build(),
        mf.chunks[2],
    );
}
