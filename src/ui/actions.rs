use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

use super::App;
use super::state::{Focus, ScreenOutcome};

impl App<'_> {
    /// Apply one key press. Returns the outcome once the user asks to leave.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenOutcome> {
        match key.code {
            KeyCode::Esc => return Some(self.outcome()),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(self.outcome());
            }
            KeyCode::F(2) => {
                self.show_logs = !self.show_logs;
            }
            KeyCode::Tab => self.cycle_focus(true),
            KeyCode::BackTab => self.cycle_focus(false),
            _ => match self.focus {
                Focus::Input => self.handle_input_key(key),
                Focus::Results => self.handle_results_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
        None
    }

    /// Tab order is input, results, history. The results stop is skipped
    /// until there are results to scroll.
    fn cycle_focus(&mut self, forward: bool) {
        let has_results = !self.screen.search_results().is_empty();
        let next = match (self.focus, forward) {
            (Focus::Input, true) | (Focus::History, false) if has_results => Focus::Results,
            (Focus::Input, true) | (Focus::Results, true) => Focus::History,
            (Focus::Input, false) => Focus::History,
            (Focus::History, _) | (Focus::Results, false) => Focus::Input,
        };
        self.set_focus(next);
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.request_search();
        } else if self.input.input(key) {
            self.screen.edit_phone(self.input.text());
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        let len = self.screen.search_results().len();
        match key.code {
            KeyCode::Up => step_selection(&mut self.results_state, len, false),
            KeyCode::Down => step_selection(&mut self.results_state, len, true),
            KeyCode::Home if len > 0 => self.results_state.select(Some(0)),
            KeyCode::End if len > 0 => self.results_state.select(Some(len - 1)),
            _ => {}
        }
    }

    fn handle_history_key(&mut self, key: KeyEvent) {
        let len = self.screen.search_history().len();
        match key.code {
            KeyCode::Up => step_selection(&mut self.history_state, len, false),
            KeyCode::Down => step_selection(&mut self.history_state, len, true),
            KeyCode::Enter => self.select_highlighted_history(),
            _ => {}
        }
    }

    fn select_highlighted_history(&mut self) {
        let Some(index) = self.history_state.selected() else {
            return;
        };
        if self.screen.select_history(index) {
            self.input.set_text(self.screen.phone_number());
            self.set_focus(Focus::Input);
        }
    }
}

fn step_selection(state: &mut ListState, len: usize, down: bool) {
    let Some(selected) = state.selected() else {
        return;
    };
    if down && selected + 1 < len {
        state.select(Some(selected + 1));
    } else if !down && selected > 0 {
        state.select(Some(selected - 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::search::catalog;
    use crate::ui::config::UiConfig;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App<'static> {
        App::new(UiConfig {
            locale: Locale::En,
            ..UiConfig::default()
        })
    }

    #[test]
    fn typing_edits_the_phone_number() {
        let mut app = app();
        for ch in "+7 1".chars() {
            assert!(app.handle_key(press(KeyCode::Char(ch))).is_none());
        }
        assert_eq!(app.screen.phone_number(), "+7 1");
    }

    #[test]
    fn enter_on_blank_input_does_not_search() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char(' ')));
        app.handle_key(press(KeyCode::Enter));
        assert!(!app.screen.is_searching());
    }

    #[test]
    fn enter_with_phone_starts_search() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('7')));
        app.handle_key(press(KeyCode::Enter));
        assert!(app.screen.is_searching());
    }

    #[test]
    fn selecting_history_copies_phone_without_searching() {
        let mut app = app();
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::History);

        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.history_state.selected(), Some(2));

        app.handle_key(press(KeyCode::Up));
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.screen.phone_number(), "+7 (912) 345-67-89");
        assert_eq!(app.input.text(), "+7 (912) 345-67-89");
        assert_eq!(app.focus(), Focus::Input);
        assert!(!app.screen.is_searching());
        assert_eq!(app.screen.search_history().len(), 3);
    }

    #[test]
    fn tab_visits_results_once_they_exist() {
        let mut app = app();
        app.screen.edit_phone("+7 1");
        let ticket = app.screen.begin_search().expect("ticket");
        app.screen
            .complete_search(ticket, catalog::mock_results(Locale::En));

        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::Results);
        assert_eq!(app.results_state.selected(), Some(0));

        for _ in 0..10 {
            app.handle_key(press(KeyCode::Down));
        }
        assert_eq!(app.results_state.selected(), Some(4));
        app.handle_key(press(KeyCode::Up));
        assert_eq!(app.results_state.selected(), Some(3));
        app.handle_key(press(KeyCode::Home));
        assert_eq!(app.results_state.selected(), Some(0));

        app.handle_key(press(KeyCode::Enter));
        assert!(!app.screen.is_searching());
        assert_eq!(app.screen.search_history().len(), 4);

        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::History);
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::Input);

        app.handle_key(press(KeyCode::BackTab));
        assert_eq!(app.focus(), Focus::History);
        app.handle_key(press(KeyCode::BackTab));
        assert_eq!(app.focus(), Focus::Results);
        app.handle_key(press(KeyCode::BackTab));
        assert_eq!(app.focus(), Focus::Input);
    }

    #[test]
    fn back_tab_skips_results_when_there_are_none() {
        let mut app = app();
        app.handle_key(press(KeyCode::BackTab));
        assert_eq!(app.focus(), Focus::History);
        app.handle_key(press(KeyCode::BackTab));
        assert_eq!(app.focus(), Focus::Input);
    }

    #[test]
    fn typing_is_ignored_while_history_has_focus() {
        let mut app = app();
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Char('9')));
        assert_eq!(app.screen.phone_number(), "");
    }

    #[test]
    fn escape_returns_outcome() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('5')));
        let outcome = app.handle_key(press(KeyCode::Esc)).expect("outcome");
        assert_eq!(outcome.phone, "5");
        assert_eq!(outcome.history.len(), 3);
        assert!(outcome.results.is_empty());
    }

    #[test]
    fn ctrl_c_returns_outcome() {
        let mut app = app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key(key).is_some());
    }

    #[test]
    fn f2_toggles_log_pane() {
        let mut app = app();
        app.handle_key(press(KeyCode::F(2)));
        assert!(app.show_logs);
        app.handle_key(press(KeyCode::F(2)));
        assert!(!app.show_logs);
    }
}
