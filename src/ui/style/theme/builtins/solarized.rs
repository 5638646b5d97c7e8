use super::super::types::{Theme, ThemeDefinition};
use ratatui::style::{Color, Modifier, Style};

pub const NAME: &str = "solarized";

pub const SOLARIZED: Theme = Theme {
    title: Style::new().fg(Color::Rgb(253, 246, 227)),
    accent: Style::new()
        .fg(Color::Rgb(38, 139, 210))
        .bg(Color::Rgb(0, 43, 54)),
    muted: Style::new().fg(Color::Rgb(88, 110, 117)),
    border: Style::new().fg(Color::Rgb(7, 54, 66)),
    focus_border: Style::new().fg(Color::Rgb(42, 161, 152)),
    badge: Style::new()
        .fg(Color::Rgb(253, 246, 227))
        .bg(Color::Rgb(7, 54, 66)),
    row_highlight: Style::new()
        .bg(Color::Rgb(7, 54, 66))
        .fg(Color::Rgb(181, 137, 0))
        .add_modifier(Modifier::BOLD),
    disabled: Style::new()
        .fg(Color::Rgb(88, 110, 117))
        .bg(Color::Rgb(7, 54, 66)),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, SOLARIZED);
