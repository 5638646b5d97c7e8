use std::collections::VecDeque;
use std::fmt;

use serde::{Serialize, Serializer};

/// Maximum number of entries kept in the search history.
pub const HISTORY_CAPACITY: usize = 5;

/// Kind of conversation a phone number was found in.
///
/// Tags outside the known set are preserved verbatim so the UI can echo them
/// back instead of silently relabelling them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Group,
    Channel,
    Chat,
    Other(String),
}

impl GroupKind {
    /// Parse a raw kind tag such as `"group"` or `"channel"`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "group" => Self::Group,
            "channel" => Self::Channel,
            "chat" => Self::Chat,
            other => Self::Other(other.to_string()),
        }
    }

    /// Return the raw tag this kind was parsed from.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Group => "group",
            Self::Channel => "channel",
            Self::Chat => "chat",
            Self::Other(tag) => tag,
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for GroupKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

/// Symbolic icons used across the screen. Rendering maps each one to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Search,
    Users,
    Radio,
    MessageCircle,
    MessageSquare,
    Clock,
    ExternalLink,
    Phone,
    ChevronRight,
    Shield,
}

impl Icon {
    /// Single-cell glyph drawn for the icon.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Search => "⌕",
            Self::Users => "☷",
            Self::Radio => "⌁",
            Self::MessageCircle => "◌",
            Self::MessageSquare => "▭",
            Self::Clock => "◷",
            Self::ExternalLink => "↗",
            Self::Phone => "☏",
            Self::ChevronRight => "›",
            Self::Shield => "◆",
        }
    }
}

/// Localised labels for the three known conversation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindLabels {
    pub group: &'static str,
    pub channel: &'static str,
    pub chat: &'static str,
}

/// Icon and badge label shown for a [`GroupKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindPresentation {
    pub icon: Icon,
    pub label: String,
}

impl GroupKind {
    /// Map the kind to its icon and badge label.
    ///
    /// Unknown kinds fall back to the group icon and show their raw tag.
    #[must_use]
    pub fn presentation(&self, labels: &KindLabels) -> KindPresentation {
        let (icon, label) = match self {
            Self::Group => (Icon::Users, labels.group),
            Self::Channel => (Icon::Radio, labels.channel),
            Self::Chat => (Icon::MessageCircle, labels.chat),
            Self::Other(tag) => (Icon::Users, tag.as_str()),
        };
        KindPresentation {
            icon,
            label: label.to_string(),
        }
    }
}

/// A conversation in which the searched number was mentioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub group_name: String,
    pub group_kind: GroupKind,
    pub last_seen: String,
    pub message_count: u32,
    pub members: u32,
}

impl SearchResult {
    pub fn new(
        group_name: impl Into<String>,
        group_kind: GroupKind,
        last_seen: impl Into<String>,
        message_count: u32,
        members: u32,
    ) -> Self {
        Self {
            group_name: group_name.into(),
            group_kind,
            last_seen: last_seen.into(),
            message_count,
            members,
        }
    }
}

/// One previously executed search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub phone: String,
    pub timestamp: String,
    pub results_count: usize,
}

impl HistoryEntry {
    pub fn new(phone: impl Into<String>, timestamp: impl Into<String>, results_count: usize) -> Self {
        Self {
            phone: phone.into(),
            timestamp: timestamp.into(),
            results_count,
        }
    }
}

/// Most-recent-first list of searches, never longer than [`HISTORY_CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchHistory {
    entries: VecDeque<HistoryEntry>,
}

impl SearchHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from entries ordered most recent first, keeping only
    /// the first [`HISTORY_CAPACITY`] of them.
    pub fn from_entries(entries: impl IntoIterator<Item = HistoryEntry>) -> Self {
        Self {
            entries: entries.into_iter().take(HISTORY_CAPACITY).collect(),
        }
    }

    /// Insert `entry` as the most recent search, evicting the oldest one when full.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a SearchHistory {
    type Item = &'a HistoryEntry;
    type IntoIter = std::collections::vec_deque::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
