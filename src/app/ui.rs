use crate::app::state::{AppMode, AppState};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::menu::MenuList;
use crate::components::modals::text_input::TextInputModal;
use crate::components::output::OutputPane;
use crate::theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub menu: Rect,
    pub output: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect, menu_height: u16) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints([
            Constraint::Length(1),           // Spacing
            Constraint::Length(menu_height), // Menu
            Constraint::Length(1),           // Spacing
            Constraint::Min(0),              // Output
        ])
        .split(main[1]);

    AppLayout {
        header: main[0],
        menu: body[1],
        output: body[3],
        footer: main[2],
    }
}

/// Redraws the whole screen from `app_state`.
pub fn draw(f: &mut Frame, app_state: &AppState, theme: &Theme) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area(), MenuList::height(&app_state.menu));

    f.render_widget(
        Header {
            workspace_root: &app_state.workspace_root,
            theme,
        },
        layout.header,
    );

    f.render_widget(
        MenuList {
            menu: &app_state.menu,
            theme,
        },
        layout.menu,
    );

    if layout.output.height > 0 {
        f.render_widget(
            OutputPane {
                log: &app_state.output,
                last_error: app_state.last_error.as_ref(),
                theme,
            },
            layout.output,
        );
    }

    f.render_widget(
        Footer {
            state: app_state,
            theme,
        },
        layout.footer,
    );

    if app_state.mode == AppMode::Prompt {
        if let Some(input) = &app_state.input {
            f.render_widget(
                TextInputModal {
                    theme,
                    title: "Enter commit message:",
                    input,
                },
                f.area(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{ErrorState, InputState, Tone};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let theme = Theme::default();
        terminal.draw(|f| draw(f, state, &theme)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draws_menu_and_output() {
        let mut state = AppState::default();
        state.output.push(Tone::Success, "All changes added to staging.");
        let screen = render(&state, 80, 24);
        assert!(screen.contains("Git Assistant"));
        assert!(screen.contains("> Check repository status"));
        assert!(screen.contains("All changes added to staging."));
        assert!(screen.contains("READY"));
    }

    #[test]
    fn test_draws_prompt_with_validation_error() {
        let mut input = InputState::new();
        input.reject("Commit message cannot be empty.");
        let state = AppState {
            mode: AppMode::Prompt,
            input: Some(input),
            ..Default::default()
        };
        let screen = render(&state, 80, 24);
        assert!(screen.contains("Enter commit message:"));
        assert!(screen.contains("Commit message cannot be empty."));
    }

    #[test]
    fn test_output_title_shows_error_severity() {
        let warning = AppState {
            last_error: Some(ErrorState::new("nothing to commit, working tree clean")),
            ..Default::default()
        };
        assert!(render(&warning, 80, 24).contains("(WARNING at "));

        let error = AppState {
            last_error: Some(ErrorState::new("fatal: unable to access remote")),
            ..Default::default()
        };
        assert!(render(&error, 80, 24).contains("(ERROR at "));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let state = AppState::default();
        for (w, h) in [(1, 1), (5, 3), (20, 4), (200, 2)] {
            render(&state, w, h);
        }
    }
}
