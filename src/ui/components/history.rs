use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use super::{badge, card, spans_width};
use crate::search::{HistoryEntry, Icon, SearchHistory};
use crate::ui::labels::Labels;
use crate::ui::style::Theme;

pub struct HistoryContext<'a> {
    pub history: &'a SearchHistory,
    pub labels: &'a Labels,
    pub theme: &'a Theme,
    pub focused: bool,
}

/// Lines needed to show `count` history rows, borders and hint included.
#[must_use]
pub fn history_height(count: usize) -> u16 {
    u16::try_from(count.max(1) * 2 + 3).unwrap_or(u16::MAX)
}

/// Render the recent searches. The selected row is highlighted only while
/// the panel has focus.
pub fn render_history(
    frame: &mut Frame,
    area: Rect,
    state: &mut ListState,
    context: HistoryContext<'_>,
) {
    let HistoryContext {
        history,
        labels,
        theme,
        focused,
    } = context;

    let block = card(Some(labels.history_title), theme, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let [hint_area, list_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
    frame.render_widget(
        Paragraph::new(labels.history_hint).style(theme.muted_style()),
        hint_area,
    );

    let width = usize::from(list_area.width);
    let items: Vec<ListItem> = history
        .iter()
        .map(|entry| ListItem::new(entry_text(entry, labels, theme, width)))
        .collect();

    let mut list = List::new(items);
    if focused {
        list = list.highlight_style(theme.row_highlight_style());
    }
    frame.render_stateful_widget(list, list_area, state);
}

fn entry_text<'a>(entry: &HistoryEntry, labels: &Labels, theme: &Theme, width: usize) -> Text<'a> {
    let mut first = vec![
        Span::styled(Icon::Phone.glyph(), theme.accent_style()),
        Span::raw(" "),
        Span::styled(entry.phone.clone(), theme.title_style()),
    ];
    let trailing = vec![
        badge(
            &format!("{} {}", entry.results_count, labels.results_suffix),
            theme,
        ),
        Span::raw(" "),
        Span::styled(Icon::ChevronRight.glyph(), theme.muted_style()),
    ];
    let used = spans_width(&first) + spans_width(&trailing);
    first.push(Span::raw(" ".repeat(width.saturating_sub(used).max(1))));
    first.extend(trailing);

    let second = Line::from(vec![
        Span::raw("  "),
        Span::styled(entry.timestamp.clone(), theme.muted_style()),
    ]);

    Text::from(vec![Line::from(first), second])
}
