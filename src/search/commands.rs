use super::model::SearchResult;

/// Correlates a triggered search with its eventual completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SearchTicket(u64);

impl SearchTicket {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Commands understood by the background search worker.
#[derive(Debug)]
pub enum SearchCommand {
    /// Schedule a lookup that completes once the configured delay elapses.
    Query {
        ticket: SearchTicket,
        /// Phone number as typed when the search was triggered.
        phone: String,
    },
    /// Drop the pending lookup if it carries this ticket.
    Cancel { ticket: SearchTicket },
    /// Cancel anything pending and stop the worker thread.
    Shutdown,
}

/// Completed lookup sent back to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub ticket: SearchTicket,
    pub results: Vec<SearchResult>,
}
