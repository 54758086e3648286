use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

const PLACEHOLDER: &str = "Describe your changes and press Enter";

/// `TextArea` with the comparison and cloning `AppState` needs.
pub struct AppTextArea<'a>(pub TextArea<'a>);

impl AppTextArea<'_> {
    fn blank() -> Self {
        let mut area = TextArea::default();
        area.set_placeholder_text(PLACEHOLDER);
        area.set_cursor_line_style(Style::default());
        Self(area)
    }
}

impl Clone for AppTextArea<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        area.set_placeholder_text(PLACEHOLDER);
        area.set_cursor_line_style(Style::default());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(
            u16::try_from(row).unwrap_or(u16::MAX),
            u16::try_from(col).unwrap_or(u16::MAX),
        ));
        Self(area)
    }
}

impl std::fmt::Debug for AppTextArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppTextArea")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for AppTextArea<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for AppTextArea<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &AppTextArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

/// The commit message prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct InputState<'a> {
    pub text_area: AppTextArea<'a>,
    /// Validation message from the last rejected submission.
    pub error: Option<String>,
}

impl Default for InputState<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState<'_> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            text_area: AppTextArea::blank(),
            error: None,
        }
    }

    /// The message exactly as typed. The prompt is single-line.
    pub fn message(&self) -> String {
        self.text_area.lines().join("")
    }

    pub fn reject(&mut self, reason: impl Into<String>) {
        self.text_area = AppTextArea::blank();
        self.error = Some(reason.into());
    }
}
