use super::super::types::{Theme, ThemeDefinition};
use ratatui::style::{Color, Modifier, Style};

pub const NAME: &str = "light";

pub const LIGHT: Theme = Theme {
    title: Style::new().fg(Color::Rgb(15, 23, 42)),
    accent: Style::new()
        .fg(Color::Rgb(0, 102, 153))
        .bg(Color::Rgb(248, 250, 252)),
    muted: Style::new().fg(Color::Rgb(100, 100, 100)),
    border: Style::new().fg(Color::Rgb(203, 213, 225)),
    focus_border: Style::new().fg(Color::Rgb(0, 102, 153)),
    badge: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(226, 232, 240)),
    row_highlight: Style::new()
        .bg(Color::Rgb(200, 200, 200))
        .fg(Color::Rgb(120, 120, 0))
        .add_modifier(Modifier::BOLD),
    disabled: Style::new()
        .fg(Color::Rgb(148, 163, 184))
        .bg(Color::Rgb(226, 232, 240)),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, LIGHT).with_aliases(&["day"]);
