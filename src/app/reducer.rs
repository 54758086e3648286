use super::{
    action::Action,
    command::Command,
    input::is_newline,
    state::{AppMode, AppState, ErrorState, ExitRequest, InputState, Tone},
};
use crate::domain::models::{CommandResult, MenuAction};
use crate::infrastructure::git::PUSH_BRANCH;

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        // --- Navigation ---
        Action::SelectNext => state.menu.select_next(),
        Action::SelectPrev => state.menu.select_prev(),
        Action::SelectIndex(idx) => {
            state.menu.select(idx);
        }
        Action::ScrollOutputUp(amount) => state.output.scroll_up(amount),
        Action::ScrollOutputDown(amount) => state.output.scroll_down(amount),
        Action::ActivateSelected => {
            let selected = state.menu.selected_action();
            return activate(state, selected);
        }
        Action::Activate(menu_action) => {
            if state.mode == AppMode::Menu {
                state.menu.select_action(menu_action);
            }
            return activate(state, menu_action);
        }

        // --- Commit Prompt ---
        Action::TextAreaInput(key) => {
            if is_newline(&key) {
                return None;
            }
            if let Some(input) = &mut state.input {
                input.text_area.input(key);
                input.error = None;
            }
        }
        Action::SubmitCommitMessage(message) => {
            if state.mode != AppMode::Prompt {
                return None;
            }
            if message.trim().is_empty() {
                if let Some(input) = &mut state.input {
                    input.reject("Commit message cannot be empty.");
                }
                return None;
            }
            state.input = None;
            state.mode = AppMode::Busy;
            state.status_message = Some("Committing changes...".to_string());
            state.output.push(Tone::Info, "Committing changes...");
            return Some(Command::Commit(message));
        }
        Action::CancelMode => {
            if state.mode == AppMode::Prompt {
                log::trace!("commit prompt cancelled");
                state.input = None;
                state.mode = AppMode::Menu;
                state.output.push(Tone::Hint, "Commit cancelled.");
            }
        }

        // --- Command Results ---
        Action::RepositoryMissing => {
            state.output.push(
                Tone::Error,
                "No Git repository found in the current directory.",
            );
            state.exit = Some(
                ExitRequest::failure("No Git repository found in the current directory.")
                    .with_context(current_directory(state)),
            );
        }
        Action::StatusChecked(result) => {
            finish(state);
            if result.succeeded {
                state
                    .output
                    .push(Tone::Info, "Git repository found. Checking status...");
                state.output.push(Tone::Success, result.output);
            } else {
                let message = format!(
                    "Failed to check repository status: {}",
                    result.error_text()
                );
                state.output.push(Tone::Error, message.clone());
                state.exit =
                    Some(ExitRequest::failure(message).with_context(current_directory(state)));
            }
        }
        Action::OperationCompleted(menu_action, result) => {
            finish(state);
            report(state, menu_action, &result);
        }

        Action::Quit => {
            state.exit = Some(ExitRequest::interrupted());
        }
        Action::Resize(..) => {}
    }
    None
}

fn activate(state: &mut AppState, menu_action: MenuAction) -> Option<Command> {
    if state.mode != AppMode::Menu {
        return None;
    }
    log::trace!("activating {menu_action:?}");
    state.output.clear();
    state.last_error = None;

    match menu_action {
        MenuAction::CheckStatus => {
            begin(state, "Checking repository status...");
            let directory = current_directory(state);
            state.output.push(Tone::Info, directory);
            Some(Command::CheckStatus)
        }
        MenuAction::StageAll => {
            begin(state, "Adding all changes to staging...");
            Some(Command::StageAll)
        }
        MenuAction::Commit => {
            state.mode = AppMode::Prompt;
            state.input = Some(InputState::new());
            None
        }
        MenuAction::Push => {
            begin(
                state,
                &format!("Pushing changes to the {PUSH_BRANCH} branch..."),
            );
            Some(Command::Push)
        }
        MenuAction::Exit => {
            state.exit = Some(ExitRequest::success("Goodbye!"));
            None
        }
    }
}

fn current_directory(state: &AppState) -> String {
    format!("Current directory: {}", state.workspace_root.display())
}

fn begin(state: &mut AppState, progress: &str) {
    state.mode = AppMode::Busy;
    state.status_message = Some(progress.to_string());
    state.output.push(Tone::Info, progress);
}

fn finish(state: &mut AppState) {
    state.mode = AppMode::Menu;
    state.status_message = None;
}

fn report(state: &mut AppState, menu_action: MenuAction, result: &CommandResult) {
    if result.succeeded {
        let text = match menu_action {
            MenuAction::StageAll => "All changes added to staging.".to_string(),
            MenuAction::Commit if result.output.is_empty() => {
                "Changes committed successfully.".to_string()
            }
            MenuAction::Push if result.output.is_empty() => {
                format!("Changes pushed to the {PUSH_BRANCH} branch.")
            }
            _ => result.output.clone(),
        };
        state.output.push(Tone::Success, text);
        return;
    }

    let what = match menu_action {
        MenuAction::StageAll => "add changes",
        MenuAction::Commit => "commit changes",
        MenuAction::Push => "push changes",
        MenuAction::CheckStatus => "check repository status",
        MenuAction::Exit => "exit",
    };
    let error = ErrorState::new(result.error_text());
    state
        .output
        .push(Tone::Error, format!("Failed to {what}: {}", error.message));
    for suggestion in &error.suggestions {
        state.output.push(Tone::Hint, suggestion.clone());
    }
    state.last_error = Some(error);
}
