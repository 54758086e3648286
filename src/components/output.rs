use crate::app::state::{ErrorSeverity, ErrorState, OutputLog};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Output of the last action, colored by tone.
pub struct OutputPane<'a> {
    pub log: &'a OutputLog,
    pub last_error: Option<&'a ErrorState>,
    pub theme: &'a Theme,
}

impl Widget for OutputPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.last_error {
            Some(err) => {
                let style = match err.severity {
                    ErrorSeverity::Warning => self.theme.output_hint,
                    ErrorSeverity::Error => self.theme.output_error,
                };
                Line::from(vec![
                    Span::raw(" Output "),
                    Span::styled(
                        format!(
                            "({} at {}) ",
                            err.severity.label(),
                            err.timestamp.format("%H:%M:%S")
                        ),
                        style,
                    ),
                ])
            }
            None => Line::from(" Output "),
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);

        let mut lines = Vec::new();
        for entry in &self.log.entries {
            let style = self.theme.for_tone(entry.tone);
            for text in entry.text.lines() {
                lines.push(Line::from(Span::styled(text.to_string(), style)));
            }
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.log.scroll, 0))
            .render(area, buf);
    }
}
