use crate::app::{action::Action, command::Command};
use crate::domain::{
    models::{CommandResult, MenuAction},
    vcs::GitFacade,
};
use anyhow::Result;
use std::future::Future;

/// Runs `command` to completion and returns the action describing its outcome.
pub async fn handle_command(command: Command, adapter: &dyn GitFacade) -> Action {
    match command {
        Command::CheckStatus => {
            if !adapter.has_repository() {
                log::error!(
                    "no repository marker in {}",
                    adapter.workspace_root().display()
                );
                return Action::RepositoryMissing;
            }
            let result = CommandResult::from(adapter.status().await);
            log::info!("status checked (succeeded: {})", result.succeeded);
            Action::StatusChecked(result)
        }
        Command::StageAll => run_operation(MenuAction::StageAll, adapter.stage_all()).await,
        Command::Commit(message) => {
            run_operation(MenuAction::Commit, adapter.commit(&message)).await
        }
        Command::Push => run_operation(MenuAction::Push, adapter.push()).await,
    }
}

async fn run_operation<Fut>(menu_action: MenuAction, operation: Fut) -> Action
where
    Fut: Future<Output = Result<String>>,
{
    let result = CommandResult::from(operation.await);
    if result.succeeded {
        log::info!("{menu_action:?} succeeded");
    } else {
        log::warn!("{menu_action:?} failed: {}", result.error_text());
    }
    Action::OperationCompleted(menu_action, result)
}
