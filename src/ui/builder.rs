use std::time::Duration;

use anyhow::Result;

use super::App;
use super::config::UiConfig;
use super::state::ScreenOutcome;
use super::style::{self, Theme};
use crate::locale::Locale;
use crate::search::SearchHistory;

/// A small builder for configuring the search screen before running it.
#[derive(Debug, Clone, Default)]
pub struct SearchUi {
    config: UiConfig,
}

impl SearchUi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: UiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.config.locale = locale;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.config.theme = theme;
        self
    }

    /// Select a built-in theme by name. Unknown names keep the current theme.
    #[must_use]
    pub fn with_theme_name(mut self, name: &str) -> Self {
        if let Some(theme) = style::by_name(name) {
            self.config.theme = theme;
        }
        self
    }

    #[must_use]
    pub fn with_search_delay(mut self, delay: Duration) -> Self {
        self.config.search_delay = delay;
        self
    }

    #[must_use]
    pub fn with_initial_phone(mut self, phone: impl Into<String>) -> Self {
        self.config.initial_phone = phone.into();
        self
    }

    #[must_use]
    pub fn with_history(mut self, history: SearchHistory) -> Self {
        self.config.history = Some(history);
        self
    }

    /// Start with an empty history instead of the built-in sample.
    #[must_use]
    pub fn without_seed_history(self) -> Self {
        self.with_history(SearchHistory::new())
    }

    #[must_use]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Build the application without starting the terminal loop.
    #[must_use]
    pub fn build<'a>(self) -> App<'a> {
        App::new(self.config)
    }

    /// Run the interactive screen with the configured options.
    pub fn run(self) -> Result<ScreenOutcome> {
        self.build().run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::style::theme::by_name;

    #[test]
    fn builder_applies_options() {
        let ui = SearchUi::new()
            .with_locale(Locale::En)
            .with_theme_name("light")
            .with_search_delay(Duration::from_millis(5))
            .with_initial_phone("+7 2")
            .without_seed_history();

        let config = ui.config();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(Some(config.theme), by_name("light"));
        assert_eq!(config.search_delay, Duration::from_millis(5));
        assert_eq!(config.initial_phone, "+7 2");

        let app = ui.build();
        assert!(app.screen.search_history().is_empty());
        assert_eq!(app.screen.phone_number(), "+7 2");
    }

    #[test]
    fn unknown_theme_name_keeps_current_theme() {
        let ui = SearchUi::new().with_theme_name("does-not-exist");
        assert_eq!(ui.config().theme, Theme::default());
    }
}
