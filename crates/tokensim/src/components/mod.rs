//! Panels around the active screen, and the trait the screens share with them.

pub mod parameters_panel;
pub mod status_bar;
pub mod tab_bar;

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::state::AppState;

/// A key and what it does, e.g. `("r", "run")`
pub type KeyHint = (&'static str, &'static str);

/// Whether a key press was consumed or should fall through to the next handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Handled,
    NotHandled,
}

impl EventResult {
    pub fn is_handled(self) -> bool {
        self == EventResult::Handled
    }
}

pub trait Component {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult;

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState);

    /// Keys this component responds to in the current state, for the status bar
    fn key_hints(&self, _state: &AppState) -> &'static [KeyHint] {
        &[]
    }
}
