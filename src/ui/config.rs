use std::time::Duration;

use crate::locale::Locale;
use crate::search::SearchHistory;

use super::style::Theme;

/// Delay before a triggered search completes.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(1200);

/// Everything the screen needs to know before it starts.
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub locale: Locale,
    pub theme: Theme,
    pub search_delay: Duration,
    /// Text placed in the phone input at start-up.
    pub initial_phone: String,
    /// History shown before the first search. `None` uses the built-in sample.
    pub history: Option<SearchHistory>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            theme: Theme::default(),
            search_delay: DEFAULT_SEARCH_DELAY,
            initial_phone: String::new(),
            history: None,
        }
    }
}
