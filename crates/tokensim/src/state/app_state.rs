use std::path::PathBuf;

use tokensim_core::{GroupBy, ResultLog, SimulationConfig};

use super::{ModalState, ParametersState, TabId};

#[derive(Debug, Default)]
pub struct ResultsState {
    /// Index of the highlighted row in the result log
    pub selected: usize,
}

impl ResultsState {
    pub fn select_next(&mut self, row_count: usize) {
        if self.selected + 1 < row_count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn page_down(&mut self, row_count: usize, page: usize) {
        self.selected = (self.selected + page).min(row_count.saturating_sub(1));
    }

    pub fn page_up(&mut self, page: usize) {
        self.selected = self.selected.saturating_sub(page);
    }

    pub fn select_last(&mut self, row_count: usize) {
        self.selected = row_count.saturating_sub(1);
    }
}

#[derive(Debug, Default)]
pub struct ChartState {
    pub group_by: GroupBy,
}

#[derive(Debug)]
pub struct AppState {
    pub active_tab: TabId,
    pub parameters: ParametersState,
    /// Config the panel values are layered over (run count, pinned percentage)
    pub base_config: SimulationConfig,
    pub results: ResultLog,
    pub results_state: ResultsState,
    pub chart_state: ChartState,
    pub modal: ModalState,
    pub error_message: Option<String>,
    /// Directory offered as the default location for CSV exports
    pub export_dir: Option<PathBuf>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl AppState {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            active_tab: TabId::default(),
            parameters: ParametersState::from_config(&config),
            base_config: config,
            results: ResultLog::new(),
            results_state: ResultsState::default(),
            chart_state: ChartState::default(),
            modal: ModalState::None,
            error_message: None,
            export_dir: None,
            exit: false,
        }
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
