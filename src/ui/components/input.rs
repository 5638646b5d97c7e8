use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Single-line phone number editor.
pub struct PhoneInput<'a> {
    textarea: TextArea<'a>,
    placeholder: String,
    placeholder_style: Style,
    focused: bool,
}

impl<'a> PhoneInput<'a> {
    pub fn new(initial: &str, placeholder: impl Into<String>, placeholder_style: Style) -> Self {
        let mut input = Self {
            textarea: TextArea::default(),
            placeholder: placeholder.into(),
            placeholder_style,
            focused: true,
        };
        input.set_text(initial);
        input
    }

    /// Current text of the input.
    #[must_use]
    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Replace the text and move the cursor to its end.
    pub fn set_text(&mut self, text: &str) {
        let mut textarea = TextArea::new(vec![text.to_string()]);
        textarea.set_placeholder_text(self.placeholder.clone());
        textarea.set_placeholder_style(self.placeholder_style);
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(CursorMove::End);
        self.textarea = textarea;
        self.apply_cursor_style();
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.apply_cursor_style();
    }

    /// Feed a key to the editor. Returns `true` when the text changed.
    ///
    /// Keys that would insert a line break are rejected.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => false,
            KeyCode::Char('m' | 'j') if ctrl => false,
            _ => self.textarea.input(key),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);
    }

    fn apply_cursor_style(&mut self) {
        let style = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(style);
    }
}
