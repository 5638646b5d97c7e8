use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Duration;

use crate::locale::Locale;
use crate::search::{SearchCommand, SearchResponse, SearchTicket, worker};

/// UI-side handles to the background lookup worker.
pub(crate) struct SearchRuntime {
    tx: Sender<SearchCommand>,
    rx: Receiver<SearchResponse>,
}

impl SearchRuntime {
    pub(crate) fn spawn(delay: Duration, locale: Locale) -> Self {
        let (tx, rx) = worker::spawn(delay, locale);
        Self { tx, rx }
    }

    /// Hand a triggered search to the worker. Returns `false` if the worker is gone.
    pub(crate) fn issue(&self, ticket: SearchTicket, phone: String) -> bool {
        self.tx.send(SearchCommand::Query { ticket, phone }).is_ok()
    }

    pub(crate) fn try_recv(&self) -> Result<SearchResponse, TryRecvError> {
        self.rx.try_recv()
    }

    pub(crate) fn shutdown(&self) {
        let _ = self.tx.send(SearchCommand::Shutdown);
    }
}
