use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use super::catalog;
use super::commands::{SearchCommand, SearchResponse, SearchTicket};
use crate::locale::Locale;

struct PendingLookup {
    ticket: SearchTicket,
    phone: String,
    deadline: Instant,
}

/// Launches the background lookup thread and returns its communication channels.
///
/// Each query completes once `delay` has elapsed, unless it is cancelled, the
/// worker is shut down, or the command sender is dropped first.
pub fn spawn(delay: Duration, locale: Locale) -> (Sender<SearchCommand>, Receiver<SearchResponse>) {
    let (command_tx, command_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    thread::spawn(move || worker_loop(delay, locale, command_rx, response_tx));

    (command_tx, response_rx)
}

fn worker_loop(
    delay: Duration,
    locale: Locale,
    command_rx: Receiver<SearchCommand>,
    response_tx: Sender<SearchResponse>,
) {
    let mut pending: Option<PendingLookup> = None;

    loop {
        let deadline = pending.as_ref().map(|lookup| lookup.deadline);
        let received = match deadline {
            None => command_rx
                .recv()
                .map_err(|_| RecvTimeoutError::Disconnected),
            Some(deadline) => {
                command_rx.recv_timeout(deadline.saturating_duration_since(Instant::now()))
            }
        };

        let command = match received {
            Ok(command) => command,
            Err(RecvTimeoutError::Timeout) => {
                if let Some(lookup) = pending.take()
                    && !deliver(&response_tx, lookup, locale)
                {
                    break;
                }
                continue;
            }
            Err(RecvTimeoutError::Disconnected) => {
                if let Some(lookup) = pending.take() {
                    log::debug!("lookup {} dropped: UI went away", lookup.ticket.id());
                }
                break;
            }
        };

        match command {
            SearchCommand::Query { ticket, phone } => {
                let lookup = PendingLookup {
                    ticket,
                    phone,
                    deadline: Instant::now() + delay,
                };
                if let Some(previous) = pending.replace(lookup) {
                    log::debug!(
                        "lookup {} superseded by {}",
                        previous.ticket.id(),
                        ticket.id()
                    );
                }
            }
            SearchCommand::Cancel { ticket } => {
                if pending.as_ref().is_some_and(|lookup| lookup.ticket == ticket) {
                    pending = None;
                    log::debug!("lookup {} cancelled", ticket.id());
                }
            }
            SearchCommand::Shutdown => {
                if let Some(lookup) = pending.take() {
                    log::debug!("lookup {} cancelled by shutdown", lookup.ticket.id());
                }
                break;
            }
        }
    }

    // Commands must be refused by the time the UI sees the responses disconnect.
    drop(command_rx);
}

fn deliver(response_tx: &Sender<SearchResponse>, lookup: PendingLookup, locale: Locale) -> bool {
    log::debug!("lookup {} for {} completed", lookup.ticket.id(), lookup.phone);
    let response = SearchResponse {
        ticket: lookup.ticket,
        results: catalog::mock_results(locale),
    };
    response_tx.send(response).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::TryRecvError;

    const DELAY: Duration = Duration::from_millis(40);

    fn query(id: u64) -> SearchCommand {
        SearchCommand::Query {
            ticket: SearchTicket::new(id),
            phone: "+7 (900) 000-00-00".to_string(),
        }
    }

    #[test]
    fn query_completes_after_delay() {
        let (tx, rx) = spawn(DELAY, Locale::En);
        let started = Instant::now();
        tx.send(query(1)).unwrap();

        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));

        let response = rx
            .recv_timeout(Duration::from_secs(2))
            .expect("lookup should complete");
        assert!(started.elapsed() >= DELAY);
        assert_eq!(response.ticket, SearchTicket::new(1));
        assert_eq!(response.results.len(), 5);

        tx.send(SearchCommand::Shutdown).unwrap();
    }

    #[test]
    fn cancelled_query_never_completes() {
        let (tx, rx) = spawn(DELAY, Locale::En);
        tx.send(query(7)).unwrap();
        tx.send(SearchCommand::Cancel {
            ticket: SearchTicket::new(7),
        })
        .unwrap();

        assert!(matches!(
            rx.recv_timeout(DELAY * 4),
            Err(RecvTimeoutError::Timeout)
        ));
        tx.send(SearchCommand::Shutdown).unwrap();
    }

    #[test]
    fn cancel_for_other_ticket_is_ignored() {
        let (tx, rx) = spawn(DELAY, Locale::En);
        tx.send(query(2)).unwrap();
        tx.send(SearchCommand::Cancel {
            ticket: SearchTicket::new(99),
        })
        .unwrap();

        let response = rx.recv_timeout(Duration::from_secs(2)).expect("completion");
        assert_eq!(response.ticket, SearchTicket::new(2));
        tx.send(SearchCommand::Shutdown).unwrap();
    }

    #[test]
    fn shutdown_discards_pending_lookup() {
        let (tx, rx) = spawn(DELAY, Locale::En);
        tx.send(query(3)).unwrap();
        tx.send(SearchCommand::Shutdown).unwrap();

        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(2)),
            Err(RecvTimeoutError::Disconnected)
        ));
    }

    #[test]
    fn dropping_sender_discards_pending_lookup() {
        let (tx, rx) = spawn(DELAY, Locale::En);
        tx.send(query(4)).unwrap();
        drop(tx);

        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(2)),
            Err(RecvTimeoutError::Disconnected)
        ));
    }

    #[test]
    fn newer_query_supersedes_pending_one() {
        let (tx, rx) = spawn(DELAY, Locale::En);
        tx.send(query(5)).unwrap();
        tx.send(query(6)).unwrap();

        let response = rx.recv_timeout(Duration::from_secs(2)).expect("completion");
        assert_eq!(response.ticket, SearchTicket::new(6));
        assert!(matches!(
            rx.recv_timeout(DELAY * 2),
            Err(RecvTimeoutError::Timeout)
        ));
        tx.send(SearchCommand::Shutdown).unwrap();
    }
}
