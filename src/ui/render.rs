use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::App;
use super::components::history::history_height;
use super::components::results::results_height;
use super::components::search_bar::SEARCH_BAR_HEIGHT;
use super::components::summary::SUMMARY_HEIGHT;
use super::components::{
    HistoryContext, ResultsContext, SearchBarContext, SummaryContext, render_history,
    render_results, render_search_bar, render_summary,
};
use super::state::Focus;
use crate::search::Icon;

const HEADER_HEIGHT: u16 = 2;
const FOOTER_HEIGHT: u16 = 2;

impl App<'_> {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let main_area = if self.show_logs {
            let [main, logs] =
                Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
                    .areas(area);
            self.logs
                .render(frame, logs, self.labels.log_title, &self.theme);
            main
        } else {
            area
        };

        self.draw_screen(frame, main_area);
    }

    fn draw_screen(&mut self, frame: &mut Frame, area: Rect) {
        let has_results = !self.screen.search_results().is_empty();
        let history_len = self.screen.search_history().len();

        let mut fixed = HEADER_HEIGHT + 1 + SEARCH_BAR_HEIGHT + FOOTER_HEIGHT;
        if has_results {
            fixed += SUMMARY_HEIGHT;
        }
        let wanted_results = if has_results {
            results_height(self.screen.search_results().len())
        } else {
            0
        };
        let (results_rows, history_rows) = share_height(
            area.height.saturating_sub(fixed),
            wanted_results,
            history_height(history_len),
        );

        let mut constraints = vec![
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(SEARCH_BAR_HEIGHT),
        ];
        if has_results {
            constraints.push(Constraint::Length(SUMMARY_HEIGHT));
            constraints.push(Constraint::Length(results_rows));
        }
        constraints.push(Constraint::Length(history_rows));
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(FOOTER_HEIGHT));

        let sections = Layout::vertical(constraints).split(area);
        let mut sections = sections.iter().copied();
        let mut next = || sections.next().unwrap_or_default();

        self.render_header(frame, next());
        next();

        render_search_bar(
            frame,
            next(),
            SearchBarContext {
                input: &self.input,
                labels: self.labels,
                theme: &self.theme,
                searching: self.screen.is_searching(),
                enabled: self.screen.can_search(),
                focused: self.focus == Focus::Input,
                throbber_state: &self.throbber_state,
            },
        );

        if has_results {
            render_summary(
                frame,
                next(),
                SummaryContext {
                    groups_found: self.screen.search_results().len(),
                    total_mentions: self.screen.total_mentions(),
                    latest_activity: self.screen.latest_activity(),
                    labels: self.labels,
                    theme: &self.theme,
                },
            );
            render_results(
                frame,
                next(),
                &mut self.results_state,
                ResultsContext {
                    results: self.screen.search_results(),
                    labels: self.labels,
                    locale: self.screen.locale(),
                    theme: &self.theme,
                    focused: self.focus == Focus::Results,
                },
            );
        }

        render_history(
            frame,
            next(),
            &mut self.history_state,
            HistoryContext {
                history: self.screen.search_history(),
                labels: self.labels,
                theme: &self.theme,
                focused: self.focus == Focus::History,
            },
        );
        next();

        self.render_footer(frame, next());
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled(Icon::Search.glyph(), self.theme.accent_style()),
            Span::raw(" "),
            Span::styled(self.labels.app_title, self.theme.title_style()),
        ]);
        let subtitle = Line::styled(self.labels.app_subtitle, self.theme.muted_style());
        frame.render_widget(
            Paragraph::new(vec![title, subtitle]).alignment(Alignment::Center),
            area,
        );
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let muted = self.theme.muted_style();
        let notice = Line::from(vec![
            Span::styled(Icon::Shield.glyph(), muted),
            Span::raw(" "),
            Span::styled(self.labels.footer, muted),
        ]);
        let hints = Line::styled(self.labels.key_hints, muted);
        frame.render_widget(
            Paragraph::new(vec![notice, hints]).alignment(Alignment::Center),
            area,
        );
    }
}

/// Split `available` rows between the results and history panels.
///
/// Each panel gets what it asks for when both fit. Otherwise a panel asking
/// for less than half keeps its size and the other takes the rest; the
/// lists scroll to keep their selection visible.
fn share_height(available: u16, results: u16, history: u16) -> (u16, u16) {
    if results.saturating_add(history) <= available {
        return (results, history);
    }
    let half = available / 2;
    if results <= half {
        (results, available - results)
    } else if history <= available - half {
        (available - history, history)
    } else {
        (available - half, half)
    }
}
