use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub title: Style,
    pub menu_item: Style,
    pub menu_selected: Style,
    pub menu_shortcut: Style,

    pub header_logo: Style,
    pub header: Style,
    pub footer: Style,
    pub key_binding: Style,

    pub output_info: Style,
    pub output_success: Style,
    pub output_error: Style,
    pub output_hint: Style,

    pub status_busy: Style,
    pub status_ready: Style,
    pub prompt_error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Rgb(80, 80, 80)),
            border_focus: Style::default().fg(Color::Yellow),

            title: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            menu_item: Style::default(),
            menu_selected: Style::default().fg(Color::Black).bg(Color::Yellow),
            menu_shortcut: Style::default().fg(Color::Rgb(120, 120, 120)),

            header_logo: Style::default()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(Color::Rgb(40, 40, 40)).fg(Color::White),
            footer: Style::default()
                .bg(Color::Rgb(30, 30, 30))
                .fg(Color::Rgb(150, 150, 150)),
            key_binding: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),

            output_info: Style::default().fg(Color::Blue),
            output_success: Style::default().fg(Color::Green),
            output_error: Style::default().fg(Color::Red),
            output_hint: Style::default().fg(Color::Yellow),

            status_busy: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            status_ready: Style::default().fg(Color::Green),
            prompt_error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    pub fn for_tone(&self, tone: crate::app::state::Tone) -> Style {
        use crate::app::state::Tone;
        match tone {
            Tone::Info => self.output_info,
            Tone::Success => self.output_success,
            Tone::Error => self.output_error,
            Tone::Hint => self.output_hint,
        }
    }
}
