use ratatui::style::{Color, Modifier, Style};

/// Colour scheme applied to every panel of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Card titles and the application title.
    pub title: Style,
    /// Icons, headline numbers and the enabled button.
    pub accent: Style,
    /// Secondary text: hints, timestamps, counters.
    pub muted: Style,
    /// Card borders.
    pub border: Style,
    /// Border of the panel that currently has keyboard focus.
    pub focus_border: Style,
    /// Kind and result-count badges.
    pub badge: Style,
    /// Highlighted history row.
    pub row_highlight: Style,
    /// The search button while it cannot be pressed.
    pub disabled: Style,
}

impl Theme {
    #[must_use]
    pub fn title_style(&self) -> Style {
        self.title.add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn accent_style(&self) -> Style {
        self.accent
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        self.muted
    }

    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        if focused { self.focus_border } else { self.border }
    }

    #[must_use]
    pub fn badge_style(&self) -> Style {
        self.badge
    }

    #[must_use]
    pub fn row_highlight_style(&self) -> Style {
        self.row_highlight
    }

    #[must_use]
    pub fn button_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::new()
                .fg(self.accent_bg())
                .bg(self.accent.fg.unwrap_or(Color::Reset))
                .add_modifier(Modifier::BOLD)
        } else {
            self.disabled
        }
    }

    fn accent_bg(&self) -> Color {
        self.accent.bg.unwrap_or(Color::Black)
    }
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
    pub name: &'static str,
    pub theme: Theme,
    pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
    pub const fn new(name: &'static str, theme: Theme) -> Self {
        Self {
            name,
            theme,
            aliases: &[],
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }
}
