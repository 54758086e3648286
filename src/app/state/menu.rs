use crate::domain::models::MenuAction;

/// The fixed menu and its cursor.
///
/// `selected` is always a valid index into `options`; navigation wraps at
/// both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    options: Vec<MenuAction>,
    selected: usize,
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: MenuAction::ALL.to_vec(),
            selected: 0,
        }
    }

    pub fn options(&self) -> &[MenuAction] {
        &self.options
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_action(&self) -> MenuAction {
        self.options[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub fn select_prev(&mut self) {
        let len = self.options.len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// Moves the cursor to `index`. Out-of-range indices leave it unchanged.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Moves the cursor onto `action` and returns its index.
    pub fn select_action(&mut self, action: MenuAction) -> Option<usize> {
        let idx = self.options.iter().position(|a| *a == action)?;
        self.selected = idx;
        Some(idx)
    }
}
