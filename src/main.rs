use crossterm::style::Stylize;
use std::process::ExitCode;
use std::sync::Arc;

use git_assistant::app::{
    config,
    r#loop::run_loop,
    state::AppState,
    terminal::{setup_panic_hook, TerminalGuard},
};
use git_assistant::domain::vcs::GitFacade;
use git_assistant::infrastructure::git::GitCli;
use git_assistant::logger;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(exit) => {
            if let Some(context) = &exit.context {
                println!("{context}");
            }
            if exit.code == 0 {
                println!("{}", exit.message.green());
            } else {
                eprintln!("{}", exit.message.red());
                eprintln!("{}", "Exiting Git Assistant...".yellow());
            }
            ExitCode::from(exit.code)
        }
        Err(err) => {
            eprintln!("{} {err:?}", "Error:".red());
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<git_assistant::app::state::ExitRequest> {
    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(err) => (config::Config::default(), Some(err)),
    };
    logger::init(config.log_file.as_deref())?;
    if let Some(err) = config_error {
        log::warn!("ignoring config file: {err:#}");
    }

    setup_panic_hook();

    let adapter = Arc::new(GitCli::new(config.git_program.clone())?);
    let workspace_root = adapter.workspace_root();
    log::info!(
        "starting in {} (git program: {})",
        workspace_root.display(),
        config.git_program
    );
    let app_state = AppState::new(&config, workspace_root);

    // The guard restores the terminal before anything is printed
    let mut guard = TerminalGuard::acquire()?;
    let result = run_loop(guard.terminal_mut(), app_state, adapter).await;
    drop(guard);

    result
}
