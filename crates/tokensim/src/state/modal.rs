//! Overlay state: the CSV export prompt and the outcome message shown after it.

use std::path::Path;

#[derive(Debug, Default)]
pub enum ModalState {
    #[default]
    None,
    ExportPrompt(ExportPrompt),
    Message(MessageModal),
}

impl ModalState {
    pub fn is_active(&self) -> bool {
        !matches!(self, ModalState::None)
    }
}

/// Editable destination for a CSV export of the current result log
#[derive(Debug)]
pub struct ExportPrompt {
    pub path: String,
    /// Cursor position in chars
    pub cursor_pos: usize,
    /// Rows the export will contain
    pub row_count: usize,
}

impl ExportPrompt {
    pub fn new(default_path: &Path, row_count: usize) -> Self {
        let path = default_path.to_string_lossy().into_owned();
        let cursor_pos = path.chars().count();
        Self {
            path,
            cursor_pos,
            row_count,
        }
    }

    /// The typed path, or `None` while it is blank
    pub fn target(&self) -> Option<&Path> {
        let trimmed = self.path.trim();
        (!trimmed.is_empty()).then(|| Path::new(trimmed))
    }

    /// Whether confirming would replace a file that already exists
    pub fn overwrites_existing(&self) -> bool {
        self.target().is_some_and(|path| path.is_file())
    }

    pub fn has_csv_extension(&self) -> bool {
        self.target()
            .and_then(|path| path.extension())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.path
            .char_indices()
            .nth(char_pos)
            .map_or(self.path.len(), |(i, _)| i)
    }

    fn char_len(&self) -> usize {
        self.path.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor_pos);
        self.path.insert(idx, c);
        self.cursor_pos += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let idx = self.byte_index(self.cursor_pos);
            self.path.remove(idx);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.char_len() {
            let idx = self.byte_index(self.cursor_pos);
            self.path.remove(idx);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor_pos = (self.cursor_pos + 1).min(self.char_len());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.char_len();
    }
}

#[derive(Debug)]
pub struct MessageModal {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl MessageModal {
    pub fn info(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: false,
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: true,
        }
    }
}
