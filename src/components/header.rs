use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::path::Path;

pub struct Header<'a> {
    pub workspace_root: &'a Path,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans = vec![
            Span::styled(" GIT ASSISTANT ", self.theme.header_logo),
            Span::styled(
                format!(" {} ", self.workspace_root.display()),
                self.theme.header,
            ),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
