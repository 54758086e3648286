use crate::app::state::MenuState;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub const TITLE: &str = "Git Assistant";

/// Title, a blank line, then one row per action.
pub struct MenuList<'a> {
    pub menu: &'a MenuState,
    pub theme: &'a Theme,
}

impl MenuList<'_> {
    pub fn height(menu: &MenuState) -> u16 {
        u16::try_from(menu.options().len() + 2).unwrap_or(u16::MAX)
    }
}

impl Widget for MenuList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(TITLE, self.theme.title)),
            Line::from(""),
        ];

        for (i, option) in self.menu.options().iter().enumerate() {
            let shortcut = Span::styled(format!("  ({})", i + 1), self.theme.menu_shortcut);
            let line = if i == self.menu.selected() {
                Line::from(vec![
                    Span::styled(format!("> {option}"), self.theme.menu_selected),
                    shortcut,
                ])
            } else {
                Line::from(vec![
                    Span::styled(format!("  {option}"), self.theme.menu_item),
                    shortcut,
                ])
            };
            lines.push(line);
        }

        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
    }

    #[test]
    fn test_selected_option_is_marked() {
        let theme = Theme::default();
        let mut menu = MenuState::new();
        menu.select_next();

        let area = Rect::new(0, 0, 40, MenuList::height(&menu));
        let mut buf = Buffer::empty(area);
        MenuList {
            menu: &menu,
            theme: &theme,
        }
        .render(area, &mut buf);

        assert!(row_text(&buf, 0).starts_with(TITLE));
        assert!(row_text(&buf, 2).starts_with("  Check repository status"));
        assert!(row_text(&buf, 3).starts_with("> Add changes"));
        assert!(row_text(&buf, 6).starts_with("  Exit"));

        assert_eq!(buf[(0, 3)].bg, Color::Yellow);
        assert_eq!(buf[(0, 3)].fg, Color::Black);
        assert_ne!(buf[(0, 2)].bg, Color::Yellow);
    }
}
