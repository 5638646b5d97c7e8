use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use super::{badge, card, spans_width};
use crate::locale::Locale;
use crate::search::{Icon, SearchResult};
use crate::ui::labels::Labels;
use crate::ui::style::Theme;

pub struct ResultsContext<'a> {
    pub results: &'a [SearchResult],
    pub labels: &'a Labels,
    pub locale: Locale,
    pub theme: &'a Theme,
    pub focused: bool,
}

/// Lines needed to show every result, borders and hint included.
#[must_use]
pub fn results_height(count: usize) -> u16 {
    u16::try_from(count * 2 + 3).unwrap_or(u16::MAX)
}

/// Render the result list: two lines per conversation. The list scrolls to
/// keep the selected row in view; it is highlighted only while focused.
pub fn render_results(
    frame: &mut Frame,
    area: Rect,
    state: &mut ListState,
    context: ResultsContext<'_>,
) {
    let ResultsContext {
        results,
        labels,
        locale,
        theme,
        focused,
    } = context;

    let block = card(Some(labels.results_title), theme, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let [hint_area, list_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
    frame.render_widget(
        Paragraph::new(labels.results_hint).style(theme.muted_style()),
        hint_area,
    );

    let width = usize::from(list_area.width);
    let items: Vec<ListItem> = results
        .iter()
        .map(|result| ListItem::new(result_text(result, labels, locale, theme, width)))
        .collect();
    let mut list = List::new(items);
    if focused {
        list = list.highlight_style(theme.row_highlight_style());
    }
    frame.render_stateful_widget(list, list_area, state);
}

fn result_text<'a>(
    result: &SearchResult,
    labels: &Labels,
    locale: Locale,
    theme: &Theme,
    width: usize,
) -> Text<'a> {
    let kind = result.group_kind.presentation(&labels.kinds);

    let mut heading = vec![
        Span::styled(kind.icon.glyph(), theme.accent_style()),
        Span::raw(" "),
        Span::styled(result.group_name.clone(), theme.title_style()),
        Span::raw(" "),
        badge(&kind.label, theme),
    ];
    let link = Span::styled(Icon::ExternalLink.glyph(), theme.muted_style());
    let used = spans_width(&heading) + spans_width(std::slice::from_ref(&link));
    heading.push(Span::raw(" ".repeat(width.saturating_sub(used).max(1))));
    heading.push(link);

    let muted = theme.muted_style();
    let details = vec![
        Span::raw("  "),
        Span::styled(
            format!(
                "{} {} {}",
                Icon::MessageSquare.glyph(),
                result.message_count,
                labels.messages_suffix
            ),
            muted,
        ),
        Span::raw("   "),
        Span::styled(
            format!(
                "{} {} {}",
                Icon::Users.glyph(),
                locale.group_thousands(result.members),
                labels.members_suffix
            ),
            muted,
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} {}", Icon::Clock.glyph(), result.last_seen),
            muted,
        ),
    ];

    Text::from(vec![Line::from(heading), Line::from(details)])
}
