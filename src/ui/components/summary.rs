use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::card;
use crate::ui::labels::Labels;
use crate::ui::style::Theme;

pub struct SummaryContext<'a> {
    pub groups_found: usize,
    pub total_mentions: u64,
    pub latest_activity: Option<&'a str>,
    pub labels: &'a Labels,
    pub theme: &'a Theme,
}

pub const SUMMARY_HEIGHT: u16 = 4;

/// Render the three summary cards side by side.
pub fn render_summary(frame: &mut Frame, area: Rect, context: SummaryContext<'_>) {
    let SummaryContext {
        groups_found,
        total_mentions,
        latest_activity,
        labels,
        theme,
    } = context;

    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).spacing(1).split(area);
    let cards = [
        (labels.groups_found, groups_found.to_string()),
        (labels.total_mentions, total_mentions.to_string()),
        (
            labels.latest_activity,
            latest_activity.unwrap_or_default().to_string(),
        ),
    ];

    for ((label, value), column) in cards.into_iter().zip(columns.iter()) {
        let block = card(None, theme, false);
        let text = vec![
            Line::styled(label, theme.muted_style()),
            Line::styled(value, theme.accent_style().add_modifier(Modifier::BOLD)),
        ];
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Left)
            .block(block);
        frame.render_widget(paragraph, *column);
    }
}
