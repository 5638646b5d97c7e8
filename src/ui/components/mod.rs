//! Widgets composing the search screen.

/// Recent searches panel.
pub mod history;
/// Phone number editor.
pub mod input;
/// Runtime log pane.
pub mod logs;
/// Result list panel.
pub mod results;
/// Search card with the input and the search button.
pub mod search_bar;
/// Summary cards shown above the results.
pub mod summary;

use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType};
use unicode_width::UnicodeWidthStr;

use super::style::Theme;

pub use history::{HistoryContext, render_history};
pub use input::PhoneInput;
pub use logs::LogPane;
pub use results::{ResultsContext, render_results};
pub use search_bar::{SearchBarContext, render_search_bar};
pub use summary::{SummaryContext, render_summary};

/// Rounded panel with an optional bold title.
pub(crate) fn card<'a>(title: Option<&'a str>, theme: &Theme, focused: bool) -> Block<'a> {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused));
    match title {
        Some(title) => block.title(Line::from(vec![
            Span::raw(" "),
            Span::styled(title, theme.title_style()),
            Span::raw(" "),
        ])),
        None => block,
    }
}

/// Badge text padded by one space on each side.
pub(crate) fn badge<'a>(text: &str, theme: &Theme) -> Span<'a> {
    Span::styled(format!(" {text} "), theme.badge_style())
}

/// Display width of `spans`, in terminal cells.
pub(crate) fn spans_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|span| span.content.width()).sum()
}
