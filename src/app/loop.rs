use crate::app::{
    action::Action,
    command::Command,
    features::git::handle_command,
    input::{is_interrupt, map_event_to_action},
    reducer,
    state::{AppState, ExitRequest},
    ui,
};
use crate::domain::vcs::GitFacade;
use crate::theme::Theme;

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc;

pub type EventResult = Result<Event, std::io::Error>;

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    adapter: Arc<dyn GitFacade>,
) -> Result<ExitRequest> {
    // A detached thread so a pending read never holds up shutdown
    let (event_tx, event_rx) = mpsc::channel(100);
    std::thread::spawn(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, adapter, event_rx).await
}

/// Reads one event at a time and fully handles it before reading the next.
///
/// Commands run to completion inside the loop. While one runs, Ctrl+C exits
/// at once and every other event is held back, then handled in arrival order
/// after the command finishes.
pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    adapter: Arc<dyn GitFacade>,
    mut event_rx: mpsc::Receiver<EventResult>,
) -> Result<ExitRequest> {
    let theme = Theme::default();
    let mut held: VecDeque<EventResult> = VecDeque::new();

    loop {
        // --- 1. Render ---
        terminal.draw(|f| ui::draw(f, &app_state, &theme))?;

        // --- 2. Event ---
        let next = match held.pop_front() {
            Some(res) => Some(res),
            None => event_rx.recv().await,
        };
        let event = match next {
            Some(res) => res?,
            None => return Err(anyhow!("Terminal input closed")),
        };
        let Some(action) = map_event_to_action(&event, &app_state) else {
            continue;
        };

        // --- 3. Update, then run whatever the reducer asked for ---
        let mut command: Option<Command> = reducer::update(&mut app_state, action);
        while let Some(cmd) = command.take() {
            terminal.draw(|f| ui::draw(f, &app_state, &theme))?;

            // The command is polled first, so one that is already done never
            // touches the input queue.
            let completion: Action = tokio::select! {
                biased;
                action = handle_command(cmd, adapter.as_ref()) => action,
                () = wait_for_interrupt(&mut event_rx, &mut held) => {
                    log::info!("interrupted while a command was running");
                    return Ok(ExitRequest::interrupted()
                        .with_context("The running git command will finish in the background."));
                }
            };
            command = reducer::update(&mut app_state, completion);
        }

        if let Some(exit) = app_state.exit.take() {
            log::info!("exiting with code {}", exit.code);
            return Ok(exit);
        }
    }
}

// Watches input while a command runs. Returns on Ctrl+C; everything else is
// moved to `held`.
async fn wait_for_interrupt(
    event_rx: &mut mpsc::Receiver<EventResult>,
    held: &mut VecDeque<EventResult>,
) {
    while let Some(res) = event_rx.recv().await {
        if let Ok(Event::Key(key)) = &res {
            if is_interrupt(key) {
                return;
            }
        }
        held.push_back(res);
    }
    std::future::pending::<()>().await;
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
