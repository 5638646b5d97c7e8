//! Static data backing the simulated lookup.
//!
//! The lookup never consults a real message store: every search resolves to
//! the same five conversations, and the screen starts with three previously
//! executed searches.

use super::model::{GroupKind, HistoryEntry, SearchHistory, SearchResult};
use crate::locale::Locale;

struct MockRecord {
    name: [&'static str; 2],
    kind: &'static str,
    last_seen: [&'static str; 2],
    message_count: u32,
    members: u32,
}

struct SeedRecord {
    phone: &'static str,
    timestamp: [&'static str; 2],
    results_count: usize,
}

// Localised columns are ordered [ru, en].
const MOCK_RECORDS: [MockRecord; 5] = [
    MockRecord {
        name: ["Разработчики Python", "Python Developers"],
        kind: "group",
        last_seen: ["2 часа назад", "2 hours ago"],
        message_count: 142,
        members: 2543,
    },
    MockRecord {
        name: ["Telegram API Community", "Telegram API Community"],
        kind: "channel",
        last_seen: ["5 часов назад", "5 hours ago"],
        message_count: 89,
        members: 8921,
    },
    MockRecord {
        name: ["Боты и автоматизация", "Bots & Automation"],
        kind: "group",
        last_seen: ["Вчера", "Yesterday"],
        message_count: 56,
        members: 1234,
    },
    MockRecord {
        name: ["IT Вакансии Москва", "IT Jobs Moscow"],
        kind: "channel",
        last_seen: ["2 дня назад", "2 days ago"],
        message_count: 23,
        members: 15432,
    },
    MockRecord {
        name: ["Личный чат с Иваном", "Private chat with Ivan"],
        kind: "chat",
        last_seen: ["Неделю назад", "A week ago"],
        message_count: 12,
        members: 2,
    },
];

const SEED_HISTORY: [SeedRecord; 3] = [
    SeedRecord {
        phone: "+7 (999) 123-45-67",
        timestamp: ["2 часа назад", "2 hours ago"],
        results_count: 5,
    },
    SeedRecord {
        phone: "+7 (912) 345-67-89",
        timestamp: ["Вчера", "Yesterday"],
        results_count: 3,
    },
    SeedRecord {
        phone: "+7 (905) 678-90-12",
        timestamp: ["3 дня назад", "3 days ago"],
        results_count: 8,
    },
];

fn column(locale: Locale) -> usize {
    match locale {
        Locale::Ru => 0,
        Locale::En => 1,
    }
}

/// The fixed set of conversations every search resolves to.
#[must_use]
pub fn mock_results(locale: Locale) -> Vec<SearchResult> {
    let column = column(locale);
    MOCK_RECORDS
        .iter()
        .map(|record| {
            SearchResult::new(
                record.name[column],
                GroupKind::from_tag(record.kind),
                record.last_seen[column],
                record.message_count,
                record.members,
            )
        })
        .collect()
}

/// History shown before the user runs any search.
#[must_use]
pub fn seeded_history(locale: Locale) -> SearchHistory {
    let column = column(locale);
    SearchHistory::from_entries(SEED_HISTORY.iter().map(|record| {
        HistoryEntry::new(record.phone, record.timestamp[column], record.results_count)
    }))
}

/// Relative timestamp recorded for a search that has just completed.
#[must_use]
pub const fn just_now(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "Только что",
        Locale::En => "just now",
    }
}
