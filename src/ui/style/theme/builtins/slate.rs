use super::super::types::{Theme, ThemeDefinition};
use ratatui::style::{Color, Modifier, Style};

pub const NAME: &str = "slate";

pub const SLATE: Theme = Theme {
    title: Style::new().fg(Color::Rgb(226, 232, 240)),
    accent: Style::new()
        .fg(Color::Rgb(56, 189, 248))
        .bg(Color::Rgb(15, 23, 42)),
    muted: Style::new().fg(Color::DarkGray),
    border: Style::new().fg(Color::Rgb(51, 65, 85)),
    focus_border: Style::new().fg(Color::LightCyan),
    badge: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .bg(Color::Rgb(30, 41, 59)),
    row_highlight: Style::new()
        .bg(Color::Rgb(30, 41, 59))
        .fg(Color::Rgb(250, 204, 21))
        .add_modifier(Modifier::BOLD),
    disabled: Style::new()
        .fg(Color::Rgb(100, 116, 139))
        .bg(Color::Rgb(30, 41, 59)),
};

pub const DEFINITION: ThemeDefinition =
    ThemeDefinition::new(NAME, SLATE).with_aliases(&["default", "dark"]);
