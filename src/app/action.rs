use crate::domain::models::{CommandResult, MenuAction};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Resize(u16, u16),
    Quit, // Ctrl+C

    // --- Navigation (Menu) ---
    SelectNext,
    SelectPrev,
    SelectIndex(usize),
    ActivateSelected,     // Enter
    Activate(MenuAction), // Numeric shortcut
    ScrollOutputUp(u16),
    ScrollOutputDown(u16),

    // --- Commit Prompt ---
    TextAreaInput(crossterm::event::KeyEvent),
    SubmitCommitMessage(String),
    CancelMode, // Esc

    // --- Command Results ---
    // Produced by the handler once the external command has exited
    RepositoryMissing,
    StatusChecked(CommandResult),
    OperationCompleted(MenuAction, CommandResult),
}
