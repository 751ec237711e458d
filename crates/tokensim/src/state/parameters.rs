use tokensim_core::{ConfigError, ParameterInput, SimulationConfig};

/// The editable simulation inputs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterField {
    Tokens,
    ValuationRange,
    MaxIterations,
    Gap,
}

impl ParameterField {
    pub const ALL: [ParameterField; 4] = [
        ParameterField::Tokens,
        ParameterField::ValuationRange,
        ParameterField::MaxIterations,
        ParameterField::Gap,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ParameterField::Tokens => "Number of Tokens",
            ParameterField::ValuationRange => "Initial Valuation Range",
            ParameterField::MaxIterations => "Max Calculations",
            ParameterField::Gap => "Sell Gap",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ParameterField::Tokens => 0,
            ParameterField::ValuationRange => 1,
            ParameterField::MaxIterations => 2,
            ParameterField::Gap => 3,
        }
    }

    /// Characters the field accepts while typing
    pub fn accepts(&self, c: char) -> bool {
        match self {
            ParameterField::Tokens => c.is_ascii_digit(),
            ParameterField::MaxIterations => c.is_ascii_digit() || c == '-',
            ParameterField::ValuationRange => c.is_ascii_digit() || c == '.' || c == '-' || c == ' ',
            ParameterField::Gap => c.is_ascii_digit() || c == '.',
        }
    }

    fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Form state for the parameter panel
///
/// Values are kept as typed; they are only parsed when a run is requested.
#[derive(Debug, Clone)]
pub struct ParametersState {
    values: [String; 4],
    pub focused: ParameterField,
    pub editing: bool,
    /// Cursor position within the focused value (ASCII only)
    pub cursor_pos: usize,
}

impl ParametersState {
    pub fn from_config(config: &SimulationConfig) -> Self {
        let input = ParameterInput::from(config);
        Self {
            values: [
                input.tokens,
                input.valuation_range,
                input.max_iterations,
                input.gap,
            ],
            focused: ParameterField::Tokens,
            editing: false,
            cursor_pos: 0,
        }
    }

    pub fn value(&self, field: ParameterField) -> &str {
        &self.values[field.index()]
    }

    pub fn set_value(&mut self, field: ParameterField, value: &str) {
        self.values[field.index()] = value.to_string();
        if field == self.focused {
            self.cursor_pos = self.cursor_pos.min(value.len());
        }
    }

    pub fn to_input(&self) -> ParameterInput {
        ParameterInput {
            tokens: self.value(ParameterField::Tokens).to_string(),
            valuation_range: self.value(ParameterField::ValuationRange).to_string(),
            max_iterations: self.value(ParameterField::MaxIterations).to_string(),
            gap: self.value(ParameterField::Gap).to_string(),
        }
    }

    pub fn parse(&self, base: &SimulationConfig) -> Result<SimulationConfig, ConfigError> {
        self.to_input().parse(base)
    }

    /// Restore every field to the built-in defaults
    pub fn reset(&mut self) {
        *self = Self::from_config(&SimulationConfig::default());
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
        self.editing = false;
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
        self.editing = false;
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
        self.cursor_pos = self.value(self.focused).len();
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    fn focused_value_mut(&mut self) -> &mut String {
        &mut self.values[self.focused.index()]
    }

    /// Insert a character at the cursor, ignoring characters the field rejects
    pub fn insert_char(&mut self, c: char) -> bool {
        if !self.focused.accepts(c) {
            return false;
        }
        let pos = self.cursor_pos;
        self.focused_value_mut().insert(pos, c);
        self.cursor_pos += 1;
        true
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let pos = self.cursor_pos;
            self.focused_value_mut().remove(pos);
        }
    }

    pub fn delete(&mut self) {
        let pos = self.cursor_pos;
        let value = self.focused_value_mut();
        if pos < value.len() {
            value.remove(pos);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.value(self.focused).len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.value(self.focused).len();
    }
}

impl Default for ParametersState {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokensim_core::{FormatError, ValuationRange};

    #[test]
    fn test_defaults_match_reset_values() {
        let state = ParametersState::default();
        assert_eq!(state.value(ParameterField::Tokens), "735");
        assert_eq!(state.value(ParameterField::ValuationRange), "18.67-20.67");
        assert_eq!(state.value(ParameterField::MaxIterations), "3");
        assert_eq!(state.value(ParameterField::Gap), "5");
    }

    #[test]
    fn test_focus_wraps() {
        let mut state = ParametersState::default();
        state.focus_prev();
        assert_eq!(state.focused, ParameterField::Gap);
        state.focus_next();
        assert_eq!(state.focused, ParameterField::Tokens);
        state.focus_next();
        assert_eq!(state.focused, ParameterField::ValuationRange);
    }

    #[test]
    fn test_editing_rejects_invalid_chars() {
        let mut state = ParametersState::default();
        state.start_editing();
        assert_eq!(state.cursor_pos, 3);

        assert!(!state.insert_char('a'));
        assert!(!state.insert_char('.'));
        assert!(state.insert_char('0'));
        assert_eq!(state.value(ParameterField::Tokens), "7350");

        state.move_cursor_home();
        state.delete();
        assert_eq!(state.value(ParameterField::Tokens), "350");
        state.move_cursor_end();
        state.backspace();
        assert_eq!(state.value(ParameterField::Tokens), "35");
    }

    #[test]
    fn test_parse_uses_base_for_hidden_fields() {
        let mut state = ParametersState::default();
        state.set_value(ParameterField::ValuationRange, "1-2");
        let base = SimulationConfig {
            run_count: 3,
            sell_percentage: Some(0.2),
            ..Default::default()
        };

        let config = state.parse(&base).unwrap();
        assert_eq!(config.valuation_range, ValuationRange::new(1.0, 2.0));
        assert_eq!(config.run_count, 3);
        assert_eq!(config.sell_percentage, Some(0.2));
    }

    #[test]
    fn test_parse_malformed_range() {
        let mut state = ParametersState::default();
        state.set_value(ParameterField::ValuationRange, "abc");
        let err = state.parse(&SimulationConfig::default()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Format(FormatError::ValuationRange("abc".to_string()))
        );
    }

    #[test]
    fn test_reset() {
        let mut state = ParametersState::default();
        state.set_value(ParameterField::Gap, "12");
        state.focus_next();
        state.start_editing();

        state.reset();
        assert_eq!(state.value(ParameterField::Gap), "5");
        assert_eq!(state.focused, ParameterField::Tokens);
        assert!(!state.editing);
    }
}
