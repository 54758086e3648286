use super::action::Action;
use super::config::KeyProfile;
use crate::domain::models::MenuAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Menu-mode key bindings. Prompt mode edits text and is not remappable.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub menu: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_profile(profile: KeyProfile) -> Self {
        let mut menu = HashMap::new();

        menu.insert(key(KeyCode::Up), Action::SelectPrev);
        menu.insert(key(KeyCode::Down), Action::SelectNext);
        menu.insert(key(KeyCode::Home), Action::SelectIndex(0));
        menu.insert(
            key(KeyCode::End),
            Action::SelectIndex(MenuAction::ALL.len() - 1),
        );
        menu.insert(key(KeyCode::Enter), Action::ActivateSelected);
        menu.insert(key(KeyCode::PageUp), Action::ScrollOutputUp(10));
        menu.insert(key(KeyCode::PageDown), Action::ScrollOutputDown(10));

        if profile == KeyProfile::Vim {
            menu.insert(key(KeyCode::Char('k')), Action::SelectPrev);
            menu.insert(key(KeyCode::Char('j')), Action::SelectNext);
            menu.insert(key(KeyCode::Char('g')), Action::SelectIndex(0));
            menu.insert(key(KeyCode::Char('K')), Action::ScrollOutputUp(1));
            menu.insert(key(KeyCode::Char('J')), Action::ScrollOutputDown(1));
        }

        Self { menu }
    }

    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        self.menu.get(&event).cloned()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}
