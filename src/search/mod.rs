//! Simulated phone-number lookup.
//!
//! [`model`] holds the result and history types, [`catalog`] the static data
//! every lookup resolves to, and [`worker`] the background timer that turns a
//! triggered search into a delayed completion.

pub mod catalog;
mod commands;
pub mod model;
pub mod worker;

pub use commands::{SearchCommand, SearchResponse, SearchTicket};
pub use model::{
    GroupKind, HISTORY_CAPACITY, HistoryEntry, Icon, KindLabels, KindPresentation, SearchHistory,
    SearchResult,
};
