//! Rendering-free state machine behind the search screen.
//!
//! All state the screen shows lives in [`SearchScreen`] and changes only
//! through [`SearchScreen::edit_phone`], [`SearchScreen::begin_search`],
//! [`SearchScreen::complete_search`] and [`SearchScreen::select_history`].

use crate::locale::Locale;
use crate::search::{HistoryEntry, SearchHistory, SearchResult, SearchTicket, catalog};

/// Lifecycle of the simulated lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching {
        ticket: SearchTicket,
        /// Phone number captured when the search was triggered.
        phone: String,
    },
}

#[derive(Debug, Clone)]
pub struct SearchScreen {
    locale: Locale,
    phone_number: String,
    phase: SearchPhase,
    search_results: Vec<SearchResult>,
    search_history: SearchHistory,
    next_ticket: u64,
}

impl SearchScreen {
    /// Screen with an empty history.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self::with_history(locale, SearchHistory::new())
    }

    /// Screen pre-populated with the built-in sample history.
    #[must_use]
    pub fn seeded(locale: Locale) -> Self {
        Self::with_history(locale, catalog::seeded_history(locale))
    }

    #[must_use]
    pub fn with_history(locale: Locale, search_history: SearchHistory) -> Self {
        Self {
            locale,
            phone_number: String::new(),
            phase: SearchPhase::Idle,
            search_results: Vec::new(),
            search_history,
            next_ticket: 0,
        }
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    #[must_use]
    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        matches!(self.phase, SearchPhase::Searching { .. })
    }

    #[must_use]
    pub fn search_results(&self) -> &[SearchResult] {
        &self.search_results
    }

    #[must_use]
    pub fn search_history(&self) -> &SearchHistory {
        &self.search_history
    }

    /// Replace the typed phone number. Any text is accepted.
    pub fn edit_phone(&mut self, phone: impl Into<String>) {
        self.phone_number = phone.into();
    }

    /// Whether triggering a search would currently start one.
    #[must_use]
    pub fn can_search(&self) -> bool {
        !self.is_searching() && !self.phone_number.trim().is_empty()
    }

    /// Move to the searching phase and hand out the ticket the completion
    /// must present. Returns `None` when the phone is blank or a search is
    /// already running; the state is left untouched in that case.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        if self.is_searching() {
            log::debug!("search ignored: another search is in progress");
            return None;
        }
        if self.phone_number.trim().is_empty() {
            log::debug!("search ignored: phone number is blank");
            return None;
        }

        self.next_ticket = self.next_ticket.wrapping_add(1);
        let ticket = SearchTicket::new(self.next_ticket);
        log::info!("search {} started for {}", ticket.id(), self.phone_number);
        self.phase = SearchPhase::Searching {
            ticket,
            phone: self.phone_number.clone(),
        };
        Some(ticket)
    }

    /// Apply the results of the search identified by `ticket`.
    ///
    /// Results replace the previous ones and the search is recorded at the top
    /// of the history. Completions for any other ticket are ignored and
    /// `false` is returned.
    pub fn complete_search(&mut self, ticket: SearchTicket, results: Vec<SearchResult>) -> bool {
        let phone = match &mut self.phase {
            SearchPhase::Searching {
                ticket: current,
                phone,
            } if *current == ticket => std::mem::take(phone),
            _ => {
                log::debug!("stale completion for search {} ignored", ticket.id());
                return false;
            }
        };

        let results_count = results.len();
        self.search_results = results;
        self.phase = SearchPhase::Idle;
        self.search_history.record(HistoryEntry::new(
            phone,
            catalog::just_now(self.locale),
            results_count,
        ));
        log::info!(
            "search {} completed with {results_count} results",
            ticket.id()
        );
        true
    }

    /// Return to idle without results when the search behind `ticket` can no
    /// longer complete. Results and history are left as they were.
    pub fn abandon_search(&mut self, ticket: SearchTicket) -> bool {
        match &self.phase {
            SearchPhase::Searching { ticket: current, .. } if *current == ticket => {
                self.phase = SearchPhase::Idle;
                log::warn!("search {} abandoned", ticket.id());
                true
            }
            _ => false,
        }
    }

    /// Copy the phone of the history entry at `index` into the input.
    ///
    /// Does not start a search. Returns `false` if there is no such entry.
    pub fn select_history(&mut self, index: usize) -> bool {
        let Some(entry) = self.search_history.get(index) else {
            return false;
        };
        self.phone_number = entry.phone.clone();
        true
    }

    /// Sum of message counts over the current results.
    #[must_use]
    pub fn total_mentions(&self) -> u64 {
        self.search_results
            .iter()
            .map(|result| u64::from(result.message_count))
            .sum()
    }

    /// Last-seen label of the first result, if there are any results.
    #[must_use]
    pub fn latest_activity(&self) -> Option<&str> {
        self.search_results
            .first()
            .map(|result| result.last_seen.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::HISTORY_CAPACITY;

    fn run_search(screen: &mut SearchScreen, phone: &str) {
        screen.edit_phone(phone);
        let ticket = screen.begin_search().expect("search should start");
        let results = catalog::mock_results(screen.locale());
        assert!(screen.complete_search(ticket, results));
    }

    #[test]
    fn seeded_scenario_produces_expected_summary() {
        let mut screen = SearchScreen::seeded(Locale::En);
        let seeded: Vec<HistoryEntry> = screen.search_history().iter().cloned().collect();

        screen.edit_phone("+7 (900) 000-00-00");
        let ticket = screen.begin_search().expect("ticket");
        assert!(screen.is_searching());
        assert!(screen.search_results().is_empty());

        assert!(screen.complete_search(ticket, catalog::mock_results(Locale::En)));

        assert!(!screen.is_searching());
        assert_eq!(screen.search_results().len(), 5);
        assert_eq!(screen.total_mentions(), 322);
        assert_eq!(screen.latest_activity(), Some("2 hours ago"));

        let history: Vec<HistoryEntry> = screen.search_history().iter().cloned().collect();
        assert_eq!(history.len(), 4);
        assert_eq!(
            history[0],
            HistoryEntry::new("+7 (900) 000-00-00", "just now", 5)
        );
        assert_eq!(&history[1..], seeded.as_slice());
    }

    #[test]
    fn blank_phone_never_starts_a_search() {
        for phone in ["", "   ", "\t\n"] {
            let mut screen = SearchScreen::seeded(Locale::Ru);
            let history_before = screen.search_history().clone();
            screen.edit_phone(phone);

            assert!(!screen.can_search());
            assert_eq!(screen.begin_search(), None);
            assert!(!screen.is_searching());
            assert!(screen.search_results().is_empty());
            assert_eq!(screen.search_history(), &history_before);
        }
    }

    #[test]
    fn triggering_while_searching_is_rejected() {
        let mut screen = SearchScreen::new(Locale::En);
        screen.edit_phone("+7 1");
        let ticket = screen.begin_search().expect("first search");
        let phase = screen.phase().clone();

        assert!(!screen.can_search());
        assert_eq!(screen.begin_search(), None);
        assert_eq!(screen.phase(), &phase);

        assert!(screen.complete_search(ticket, catalog::mock_results(Locale::En)));
        assert_eq!(screen.search_history().len(), 1);
    }

    #[test]
    fn six_searches_keep_five_most_recent() {
        let mut screen = SearchScreen::new(Locale::En);
        for index in 1..=6 {
            run_search(&mut screen, &format!("+7 {index}"));
        }

        let phones: Vec<&str> = screen
            .search_history()
            .iter()
            .map(|entry| entry.phone.as_str())
            .collect();
        assert_eq!(screen.search_history().len(), HISTORY_CAPACITY);
        assert_eq!(phones, ["+7 6", "+7 5", "+7 4", "+7 3", "+7 2"]);
    }

    #[test]
    fn seeded_history_evicts_oldest_after_overflow() {
        let mut screen = SearchScreen::seeded(Locale::En);
        for index in 1..=3 {
            run_search(&mut screen, &format!("+7 {index}"));
        }

        let phones: Vec<&str> = screen
            .search_history()
            .iter()
            .map(|entry| entry.phone.as_str())
            .collect();
        assert_eq!(
            phones,
            [
                "+7 3",
                "+7 2",
                "+7 1",
                "+7 (999) 123-45-67",
                "+7 (912) 345-67-89"
            ]
        );
    }

    #[test]
    fn selecting_history_only_changes_phone() {
        let mut screen = SearchScreen::seeded(Locale::En);
        run_search(&mut screen, "+7 (900) 000-00-00");
        let results = screen.search_results().to_vec();
        let history = screen.search_history().clone();

        assert!(screen.select_history(2));
        assert_eq!(screen.phone_number(), "+7 (912) 345-67-89");
        assert_eq!(screen.search_results(), results.as_slice());
        assert_eq!(screen.search_history(), &history);
        assert!(!screen.is_searching());

        assert!(!screen.select_history(10));
        assert_eq!(screen.phone_number(), "+7 (912) 345-67-89");
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut screen = SearchScreen::new(Locale::En);
        screen.edit_phone("+7 1");
        let ticket = screen.begin_search().expect("ticket");

        let bogus = SearchTicket::new(ticket.id() + 1);
        assert!(!screen.complete_search(bogus, catalog::mock_results(Locale::En)));
        assert!(screen.is_searching());

        assert!(screen.complete_search(ticket, catalog::mock_results(Locale::En)));
        assert!(!screen.complete_search(ticket, catalog::mock_results(Locale::En)));
        assert_eq!(screen.search_history().len(), 1);
    }

    #[test]
    fn history_records_phone_at_trigger_time() {
        let mut screen = SearchScreen::new(Locale::Ru);
        screen.edit_phone("+7 (900) 000-00-00");
        let ticket = screen.begin_search().expect("ticket");
        screen.edit_phone("+7 (911) 111-11-11");

        assert!(screen.complete_search(ticket, catalog::mock_results(Locale::Ru)));
        let entry = screen.search_history().get(0).expect("entry");
        assert_eq!(entry.phone, "+7 (900) 000-00-00");
        assert_eq!(entry.timestamp, "Только что");
        assert_eq!(screen.phone_number(), "+7 (911) 111-11-11");
    }

    #[test]
    fn abandoned_search_returns_to_idle_untouched() {
        let mut screen = SearchScreen::seeded(Locale::En);
        let history = screen.search_history().clone();
        screen.edit_phone("+7 1");
        let ticket = screen.begin_search().expect("ticket");

        assert!(!screen.abandon_search(SearchTicket::new(ticket.id() + 1)));
        assert!(screen.is_searching());

        assert!(screen.abandon_search(ticket));
        assert!(!screen.is_searching());
        assert!(screen.search_results().is_empty());
        assert_eq!(screen.search_history(), &history);
        assert!(screen.can_search());
        assert!(!screen.complete_search(ticket, catalog::mock_results(Locale::En)));
    }

    #[test]
    fn results_are_replaced_not_accumulated() {
        let mut screen = SearchScreen::new(Locale::En);
        run_search(&mut screen, "+7 1");
        run_search(&mut screen, "+7 2");
        assert_eq!(screen.search_results().len(), 5);
    }

    #[test]
    fn derived_values_are_empty_without_results() {
        let screen = SearchScreen::seeded(Locale::En);
        assert_eq!(screen.total_mentions(), 0);
        assert_eq!(screen.latest_activity(), None);
    }

    #[test]
    fn whitespace_is_kept_verbatim_in_history() {
        let mut screen = SearchScreen::new(Locale::En);
        run_search(&mut screen, "  +7 5  ");
        assert_eq!(
            screen.search_history().get(0).map(|entry| entry.phone.as_str()),
            Some("  +7 5  ")
        );
    }
}
