use ratatui::widgets::ListState;
use serde::Serialize;
use throbber_widgets_tui::ThrobberState;

use super::components::{LogPane, PhoneInput};
use super::config::UiConfig;
use super::labels::Labels;
use super::screen::SearchScreen;
use crate::search::{SearchHistory, SearchResult};
use crate::ui::style::Theme;

mod search_runtime;

pub(crate) use search_runtime::SearchRuntime;

/// Which panel receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    /// Only reachable once a search has produced results.
    Results,
    History,
}

/// Final state reported when the user leaves the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenOutcome {
    pub phone: String,
    pub results: Vec<SearchResult>,
    pub history: SearchHistory,
}

impl Drop for App<'_> {
    fn drop(&mut self) {
        self.search.shutdown();
    }
}

pub struct App<'a> {
    pub screen: SearchScreen,
    pub theme: Theme,
    pub(crate) labels: &'static Labels,
    pub(crate) input: PhoneInput<'a>,
    pub(crate) focus: Focus,
    pub(crate) results_state: ListState,
    pub(crate) history_state: ListState,
    pub(crate) throbber_state: ThrobberState,
    pub(crate) logs: LogPane,
    pub(crate) show_logs: bool,
    pub(super) search: SearchRuntime,
}

impl<'a> App<'a> {
    pub fn new(config: UiConfig) -> Self {
        let UiConfig {
            locale,
            theme,
            search_delay,
            initial_phone,
            history,
        } = config;

        let mut screen = match history {
            Some(history) => SearchScreen::with_history(locale, history),
            None => SearchScreen::seeded(locale),
        };
        screen.edit_phone(initial_phone.as_str());

        let labels = Labels::for_locale(locale);
        let input = PhoneInput::new(&initial_phone, labels.placeholder, theme.muted_style());

        Self {
            screen,
            theme,
            labels,
            input,
            focus: Focus::Input,
            results_state: ListState::default(),
            history_state: ListState::default(),
            throbber_state: ThrobberState::default(),
            logs: LogPane::new(),
            show_logs: false,
            search: SearchRuntime::spawn(search_delay, locale),
        }
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub(crate) fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.input.set_focused(focus == Focus::Input);
        match focus {
            Focus::Input => {}
            Focus::Results => self.ensure_results_selection(),
            Focus::History => self.ensure_history_selection(),
        }
    }

    pub(crate) fn ensure_results_selection(&mut self) {
        clamp_selection(&mut self.results_state, self.screen.search_results().len());
    }

    pub(crate) fn ensure_history_selection(&mut self) {
        clamp_selection(&mut self.history_state, self.screen.search_history().len());
    }

    /// Snapshot of what the user leaves behind.
    #[must_use]
    pub fn outcome(&self) -> ScreenOutcome {
        ScreenOutcome {
            phone: self.screen.phone_number().to_string(),
            results: self.screen.search_results().to_vec(),
            history: self.screen.search_history().clone(),
        }
    }
}

/// Keep a list selection on an existing row, defaulting to the first one.
fn clamp_selection(state: &mut ListState, len: usize) {
    match state.selected() {
        _ if len == 0 => state.select(None),
        None => state.select(Some(0)),
        Some(selected) if selected >= len => state.select(Some(len - 1)),
        Some(_) => {}
    }
}
