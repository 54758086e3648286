use crate::app::{
    action::Action,
    state::{AppMode, AppState},
};
use crate::domain::models::MenuAction;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Ctrl+C. Raw mode swallows SIGINT, so the interrupt arrives as a key.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c' | 'C'))
}

/// Keys that `tui-textarea` would turn into a line break. The commit prompt is
/// single-line, so all of them submit.
pub fn is_newline(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Char('\n' | '\r') => true,
        KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

pub fn map_event_to_action(event: &Event, app_state: &AppState<'_>) -> Option<Action> {
    let key = match event {
        Event::Key(key) => *key,
        Event::Resize(w, h) => return Some(Action::Resize(*w, *h)),
        _ => return None,
    };

    if key.kind == KeyEventKind::Release {
        return None;
    }
    if is_interrupt(&key) {
        return Some(Action::Quit);
    }

    match app_state.mode {
        AppMode::Busy => None,
        AppMode::Prompt if is_newline(&key) => app_state
            .input
            .as_ref()
            .map(|input| Action::SubmitCommitMessage(input.message())),
        AppMode::Prompt => match key.code {
            KeyCode::Esc => Some(Action::CancelMode),
            _ => Some(Action::TextAreaInput(key)),
        },
        AppMode::Menu => {
            if let Some(action) = app_state.keymap.get_action(key) {
                return Some(action);
            }
            match key.code {
                KeyCode::Char(c @ '1'..='9') if key.modifiers.is_empty() => {
                    let idx = c.to_digit(10)? as usize - 1;
                    MenuAction::ALL.get(idx).copied().map(Action::Activate)
                }
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::InputState;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_menu_keys() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(&press(KeyCode::Up), &state),
            Some(Action::SelectPrev)
        );
        assert_eq!(
            map_event_to_action(&press(KeyCode::Down), &state),
            Some(Action::SelectNext)
        );
        assert_eq!(
            map_event_to_action(&press(KeyCode::Enter), &state),
            Some(Action::ActivateSelected)
        );
        assert_eq!(
            map_event_to_action(&press(KeyCode::Char('4')), &state),
            Some(Action::Activate(MenuAction::Push))
        );
        assert_eq!(map_event_to_action(&press(KeyCode::Char('6')), &state), None);
        assert_eq!(map_event_to_action(&press(KeyCode::Char('x')), &state), None);
    }

    #[test]
    fn test_interrupt_in_every_mode() {
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        for mode in [AppMode::Menu, AppMode::Prompt, AppMode::Busy] {
            let state = AppState {
                mode,
                input: Some(InputState::new()),
                ..Default::default()
            };
            assert_eq!(map_event_to_action(&ctrl_c, &state), Some(Action::Quit));
        }
    }

    #[test]
    fn test_busy_ignores_keys() {
        let state = AppState {
            mode: AppMode::Busy,
            ..Default::default()
        };
        assert_eq!(map_event_to_action(&press(KeyCode::Enter), &state), None);
        assert_eq!(map_event_to_action(&press(KeyCode::Down), &state), None);
    }

    #[test]
    fn test_prompt_keys() {
        let state = AppState {
            mode: AppMode::Prompt,
            input: Some(InputState::new()),
            ..Default::default()
        };
        assert_eq!(
            map_event_to_action(&press(KeyCode::Enter), &state),
            Some(Action::SubmitCommitMessage(String::new()))
        );
        assert_eq!(
            map_event_to_action(&press(KeyCode::Esc), &state),
            Some(Action::CancelMode)
        );
        // Arrow keys move the cursor instead of the menu
        assert!(matches!(
            map_event_to_action(&press(KeyCode::Up), &state),
            Some(Action::TextAreaInput(_))
        ));
    }

    #[test]
    fn test_prompt_line_breaks_submit() {
        let mut state = AppState {
            mode: AppMode::Prompt,
            input: Some(InputState::new()),
            ..Default::default()
        };
        for c in "fix".chars() {
            let action = map_event_to_action(&press(KeyCode::Char(c)), &state).unwrap();
            crate::app::reducer::update(&mut state, action);
        }

        let line_breaks = [
            KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL),
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL),
            KeyEvent::new(KeyCode::Char('\n'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('\r'), KeyModifiers::NONE),
        ];
        for key in line_breaks {
            assert_eq!(
                map_event_to_action(&Event::Key(key), &state),
                Some(Action::SubmitCommitMessage("fix".to_string()))
            );
        }
        // Plain letters still type
        assert!(matches!(
            map_event_to_action(&press(KeyCode::Char('m')), &state),
            Some(Action::TextAreaInput(_))
        ));
    }

    #[test]
    fn test_release_events_ignored() {
        let state = AppState::default();
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_event_to_action(&Event::Key(key), &state), None);
    }
}
