use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};
use tokensim_core::RandomSampler;

use crate::actions::{self, ActionResult};
use crate::components::{
    Component, parameters_panel::ParametersPanel,
    status_bar::{GLOBAL_HINTS, StatusBar},
    tab_bar::TabBar,
};
use crate::config::AppConfig;
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::screens::{chart::ChartScreen, results::ResultsScreen};
use crate::state::{AppState, ModalState, TabId};

pub struct App {
    state: AppState,
    sampler: RandomSampler<SmallRng>,
    tab_bar: TabBar,
    status_bar: StatusBar,
    parameters_panel: ParametersPanel,
    results_screen: ResultsScreen,
    chart_screen: ChartScreen,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self::with_sampler(config, RandomSampler::from_os_rng())
    }

    /// Create an app whose draws are reproducible
    pub fn with_seed(config: AppConfig, seed: u64) -> Self {
        Self::with_sampler(config, RandomSampler::new(SmallRng::seed_from_u64(seed)))
    }

    fn with_sampler(config: AppConfig, sampler: RandomSampler<SmallRng>) -> Self {
        let mut state = AppState::new(config.simulation);
        state.export_dir = config.export_dir;

        Self {
            state,
            sampler,
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            parameters_panel: ParametersPanel::new(),
            results_screen: ResultsScreen::new(),
            chart_screen: ChartScreen::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

impl App {
    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!("Application started");

        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        tracing::info!(rows = self.state.results.len(), "Exiting");
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Parameters
                Constraint::Length(2), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.parameters_panel.render(frame, chunks[0], &self.state);
        self.tab_bar.render(frame, chunks[1], &self.state);
        self.render_active_screen(frame, chunks[2]);
        self.refresh_hints();
        self.status_bar.render(frame, chunks[3], &self.state);

        // Render modal overlay (if active)
        render_modal(frame, &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Results => self.results_screen.render(frame, area, &self.state),
            TabId::Chart => self.chart_screen.render(frame, area, &self.state),
        }
    }

    /// Hints for whatever currently receives keys: the field being edited,
    /// or the global keys plus the panel's and active screen's own
    fn refresh_hints(&mut self) {
        let panel = self.parameters_panel.key_hints(&self.state);
        if self.state.parameters.editing {
            self.status_bar.set_hints(panel.iter().copied());
            return;
        }

        let screen = match self.state.active_tab {
            TabId::Results => self.results_screen.key_hints(&self.state),
            TabId::Chart => self.chart_screen.key_hints(&self.state),
        };
        self.status_bar
            .set_hints(GLOBAL_HINTS.iter().chain(panel).chain(screen).copied());
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Handle modal first if active
        if self.state.modal.is_active() {
            match handle_modal_key(key_event, &mut self.state) {
                ModalResult::Export(path) => {
                    let result = actions::handle_export_csv(&self.state, &path);
                    self.apply_action_result(result);
                }
                ModalResult::Dismissed => {
                    self.state.modal = ModalState::None;
                }
                ModalResult::Continue => {}
            }
            return;
        }

        // A field being edited takes every key
        if self.state.parameters.editing {
            self.parameters_panel.handle_key(key_event, &mut self.state);
            return;
        }

        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('r') if key_event.modifiers.is_empty() => {
                actions::run_simulation(&mut self.state, &mut self.sampler);
                return;
            }
            KeyCode::Char('e') if key_event.modifiers.is_empty() => {
                self.state.modal = actions::open_export_prompt(&self.state);
                return;
            }
            KeyCode::Char('x') if key_event.modifiers.is_empty() => {
                actions::reset_inputs(&mut self.state);
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        if self
            .parameters_panel
            .handle_key(key_event, &mut self.state)
            .is_handled()
            || self.tab_bar.handle_key(key_event, &mut self.state).is_handled()
        {
            return;
        }

        match self.state.active_tab {
            TabId::Results => self.results_screen.handle_key(key_event, &mut self.state),
            TabId::Chart => self.chart_screen.handle_key(key_event, &mut self.state),
        };
    }

    /// Apply the result of an action handler
    fn apply_action_result(&mut self, result: ActionResult) {
        match result {
            ActionResult::Done(modal) => {
                self.state.modal = modal.unwrap_or(ModalState::None);
            }
            ActionResult::Error(msg) => {
                self.state.set_error(msg);
                self.state.modal = ModalState::None;
            }
        }
    }
}
