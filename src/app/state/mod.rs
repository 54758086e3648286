use super::config::Config;
use super::keymap::KeyMap;
use std::path::PathBuf;
use std::sync::Arc;

pub mod error;
pub mod input;
pub mod menu;
pub mod output;

// Re-exports
pub use error::{ErrorSeverity, ErrorState};
pub use input::{AppTextArea, InputState};
pub use menu::MenuState;
pub use output::{OutputEntry, OutputLog, Tone};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppMode {
    Menu,   // Navigating the action list
    Prompt, // Typing a commit message
    Busy,   // An external command is running
}

/// Why the loop stopped, and what to tell the user once the terminal is back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitRequest {
    pub code: u8,
    pub message: String,
    /// Printed plainly before `message`.
    pub context: Option<String>,
}

impl ExitRequest {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            code: 0,
            message: message.into(),
            context: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            code: 1,
            message: message.into(),
            context: None,
        }
    }

    pub fn interrupted() -> Self {
        Self::success("Exiting Git Assistant. Goodbye!")
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Lifecycle ---
    pub mode: AppMode,
    pub exit: Option<ExitRequest>,
    pub workspace_root: PathBuf,

    // --- Menu ---
    pub menu: MenuState,

    // --- Commit Prompt ---
    pub input: Option<InputState<'a>>,

    // --- Results ---
    pub output: OutputLog,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>, // "Pushing changes..."

    // --- Config ---
    pub keymap: Arc<KeyMap>,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &Config, workspace_root: PathBuf) -> Self {
        Self {
            keymap: Arc::new(KeyMap::from_profile(config.key_profile)),
            workspace_root,
            ..Default::default()
        }
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            mode: AppMode::Menu,
            exit: None,
            workspace_root: PathBuf::new(),
            menu: MenuState::new(),
            input: None,
            output: OutputLog::default(),
            last_error: None,
            status_message: None,
            keymap: Arc::new(KeyMap::from_profile(Default::default())),
        }
    }
}
