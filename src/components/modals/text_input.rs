use crate::app::state::InputState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

/// Single-line prompt with an optional validation message under the input.
pub struct TextInputModal<'a, 'b> {
    pub theme: &'a Theme,
    pub title: &'a str,
    pub input: &'a InputState<'b>,
}

impl Widget for TextInputModal<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = if self.input.error.is_some() { 4 } else { 3 };
        let modal_area = centered_rect_fixed_height(60, height, area);

        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.title, self.theme.key_binding),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);
        if inner_area.width == 0 || inner_area.height == 0 {
            return;
        }

        let text_area = Rect {
            height: 1,
            ..inner_area
        };
        Widget::render(&self.input.text_area, text_area, buf);

        if let Some(error) = &self.input.error {
            if inner_area.height > 1 {
                let line = Line::from(Span::styled(error.as_str(), self.theme.prompt_error));
                buf.set_line(inner_area.x, inner_area.y + 1, &line, inner_area.width);
            }
        }
    }
}
