use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a, 'b> {
    pub state: &'a AppState<'b>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let status_span = match (&state.status_message, state.mode) {
            (Some(msg), AppMode::Busy) => Span::styled(format!("  {msg}  "), theme.status_busy),
            (_, AppMode::Prompt) => Span::styled("  COMMIT  ", theme.key_binding),
            _ => Span::styled("  READY  ", theme.status_ready),
        };

        let hints: &[(&str, &str)] = match state.mode {
            AppMode::Menu => &[
                ("↑/↓", "move"),
                ("Enter", "select"),
                ("1-5", "run"),
                ("PgUp/PgDn", "scroll"),
                ("Ctrl+C", "quit"),
            ],
            AppMode::Prompt => &[("Enter", "commit"), ("Esc", "cancel"), ("Ctrl+C", "quit")],
            AppMode::Busy => &[("Ctrl+C", "abort and quit")],
        };

        let mut spans = vec![status_span, Span::raw(" ")];
        for (key, desc) in hints {
            spans.push(Span::styled(*key, theme.key_binding));
            spans.push(Span::raw(format!(" {desc}  ")));
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
