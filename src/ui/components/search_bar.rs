use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use super::{PhoneInput, card};
use crate::search::Icon;
use crate::ui::labels::Labels;
use crate::ui::style::Theme;

/// Argument bundle for rendering the search card.
pub struct SearchBarContext<'a> {
    pub input: &'a PhoneInput<'a>,
    pub labels: &'a Labels,
    pub theme: &'a Theme,
    pub searching: bool,
    pub enabled: bool,
    pub focused: bool,
    pub throbber_state: &'a ThrobberState,
}

/// Lines the search card occupies, borders included.
pub const SEARCH_BAR_HEIGHT: u16 = 5;

/// Render the search card: hint, phone input and the search button.
pub fn render_search_bar(frame: &mut Frame, area: Rect, context: SearchBarContext<'_>) {
    let SearchBarContext {
        input,
        labels,
        theme,
        searching,
        enabled,
        focused,
        throbber_state,
    } = context;

    let block = card(Some(labels.search_title), theme, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width < 4 || inner.height == 0 {
        return;
    }

    let [hint_area, _, row_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(labels.search_hint).style(theme.muted_style()),
        hint_area,
    );

    let button_width = button_width(labels).min(inner.width / 2);
    let [input_area, _, button_area] = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(button_width),
    ])
    .areas(row_area);

    input.render(frame, input_area);
    render_button(frame, button_area, labels, theme, searching, enabled, throbber_state);
}

fn render_button(
    frame: &mut Frame,
    area: Rect,
    labels: &Labels,
    theme: &Theme,
    searching: bool,
    enabled: bool,
    throbber_state: &ThrobberState,
) {
    let style = theme.button_style(enabled);
    let line = if searching {
        let spinner = Throbber::default().style(style).throbber_style(style);
        Line::from(vec![
            spinner.to_symbol_span(throbber_state),
            Span::styled(labels.searching, style),
        ])
    } else {
        Line::from(vec![
            Span::styled(Icon::Search.glyph(), style),
            Span::styled(" ", style),
            Span::styled(labels.find, style),
        ])
    };

    let button = Paragraph::new(line)
        .alignment(Alignment::Center)
        .style(style);
    frame.render_widget(button, area);
}

fn button_width(labels: &Labels) -> u16 {
    let widest = labels.find.width().max(labels.searching.width());
    // glyph, gap and one cell of padding on each side
    u16::try_from(widest + 4).unwrap_or(u16::MAX)
}
