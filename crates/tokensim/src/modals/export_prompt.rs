//! Path prompt opened by `e`: shows what will be written and where.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::ExportPrompt;
use crate::util::format::format_tokens;

use super::ModalResult;
use super::helpers::{HelpText, calculate_scroll, render_cursor_line, render_modal_frame};

const WIDTH: u16 = 64;
const HEIGHT: u16 = 10;

/// Warning line under the path, if any
fn path_notice(prompt: &ExportPrompt) -> Option<Span<'static>> {
    if prompt.target().is_none() {
        Some(Span::styled("Enter a file path", Style::default().fg(Color::Red)))
    } else if prompt.overwrites_existing() {
        Some(Span::styled(
            "File exists and will be replaced",
            Style::default().fg(Color::Yellow),
        ))
    } else if !prompt.has_csv_extension() {
        Some(Span::styled(
            "Path does not end in .csv",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        None
    }
}

pub fn render(frame: &mut Frame, prompt: &ExportPrompt) {
    let mf = render_modal_frame(
        frame,
        "Export CSV",
        WIDTH,
        HEIGHT,
        Color::Cyan,
        &[
            Constraint::Length(1), // Row count
            Constraint::Length(3), // Path field
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Help text
        ],
    );

    let summary = Line::from(vec![
        Span::raw("Write "),
        Span::styled(
            format_tokens(prompt.row_count as u64),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" rows (plus header) to:"),
    ]);
    frame.render_widget(Paragraph::new(summary), mf.chunks[0]);

    let field = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let field_inner = field.inner(mf.chunks[1]);
    let scrolled = calculate_scroll(&prompt.path, prompt.cursor_pos, field_inner.width as usize);
    frame.render_widget(field, mf.chunks[1]);
    frame.render_widget(
        Paragraph::new(render_cursor_line(
            &scrolled.display_value,
            scrolled.cursor_pos,
            " ",
        )),
        field_inner,
    );

    if let Some(notice) = path_notice(prompt) {
        frame.render_widget(Paragraph::new(Line::from(notice)), mf.chunks[2]);
    }

    let help = HelpText::new()
        .key("[Enter]", Color::Green, "Export")
        .key("[Esc]", Color::Yellow, "Cancel")
        .build();
    frame.render_widget(help, mf.chunks[4]);
}

pub fn handle_key(key: KeyEvent, prompt: &mut ExportPrompt) -> ModalResult {
    match key.code {
        KeyCode::Esc => return ModalResult::Dismissed,
        // A blank path keeps the prompt open; the notice explains why
        KeyCode::Enter => {
            return match prompt.target() {
                Some(path) => ModalResult::Export(path.to_string_lossy().into_owned()),
                None => ModalResult::Continue,
            };
        }
        KeyCode::Backspace => prompt.backspace(),
        KeyCode::Delete => prompt.delete(),
        KeyCode::Left => prompt.move_cursor_left(),
        KeyCode::Right => prompt.move_cursor_right(),
        KeyCode::Home => prompt.move_cursor_home(),
        KeyCode::End => prompt.move_cursor_end(),
        KeyCode::Char(c) => prompt.insert_char(c),
        _ => {}
    }
    ModalResult::Continue
}
