use log::LevelFilter;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetState};

use super::card;
use crate::ui::style::Theme;

/// State of the runtime log pane.
pub struct LogPane {
    widget: TuiWidgetState,
}

impl LogPane {
    pub fn new() -> Self {
        let widget = TuiWidgetState::new().set_default_display_level(LevelFilter::Debug);
        Self { widget }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
        frame.render_widget(Clear, area);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let widget = TuiLoggerWidget::default()
            .block(card(Some(title), theme, false))
            .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
            .output_target(false)
            .style(theme.muted_style())
            .state(&self.widget);
        frame.render_widget(widget, area);
    }
}

impl Default for LogPane {
    fn default() -> Self {
        Self::new()
    }
}
