use std::sync::mpsc::TryRecvError;

use ratatui::widgets::ListState;

use super::App;
use crate::search::SearchResponse;

impl App<'_> {
    /// Trigger a search for the current phone number.
    ///
    /// Blank input or a search already in progress make this a no-op.
    pub(crate) fn request_search(&mut self) {
        let Some(ticket) = self.screen.begin_search() else {
            return;
        };
        let phone = self.screen.phone_number().to_string();
        if !self.search.issue(ticket, phone) {
            log::error!("search worker is not running; search {} cannot complete", ticket.id());
            self.screen.abandon_search(ticket);
        }
    }

    /// Drain completed searches waiting on the receiver channel.
    pub(crate) fn pump_search_results(&mut self) {
        loop {
            match self.search.try_recv() {
                Ok(response) => self.handle_search_response(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    fn handle_search_response(&mut self, response: SearchResponse) {
        if self
            .screen
            .complete_search(response.ticket, response.results)
        {
            self.results_state = ListState::default();
            self.ensure_results_selection();
            self.ensure_history_selection();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::{Duration, Instant};

    use super::*;
    use crate::locale::Locale;
    use crate::ui::config::UiConfig;

    #[test]
    fn search_is_abandoned_when_worker_is_gone() {
        let mut app = App::new(UiConfig {
            locale: Locale::En,
            initial_phone: "+7 1".to_string(),
            ..UiConfig::default()
        });
        app.search.shutdown();

        let deadline = Instant::now() + Duration::from_secs(2);
        while !matches!(app.search.try_recv(), Err(TryRecvError::Disconnected))
            && Instant::now() < deadline
        {
            thread::sleep(Duration::from_millis(5));
        }

        app.request_search();
        assert!(!app.screen.is_searching());
        assert!(app.screen.can_search());
        assert_eq!(app.screen.search_history().len(), 3);
    }
}
