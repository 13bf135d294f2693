//! Interactive terminal session.

use crate::input::{Intent, handle_key};
use crate::ui;
use crate::view::View;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tictactoe_store::{Cell, GameRuntime, GameSettings, StoreHandle};
use tracing::{debug, error, info, instrument};

/// Runs the game in the terminal until the user quits.
#[instrument(skip_all)]
pub async fn run(settings: GameSettings) -> Result<()> {
    info!("Starting terminal session");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (runtime, handle) = GameRuntime::new(&settings);
    let runtime_task = runtime.spawn();

    let res = event_loop(&mut terminal, &handle).await;

    drop(handle);
    if let Err(e) = runtime_task.await {
        error!(error = %e, "Runtime task failed");
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    handle: &StoreHandle,
) -> Result<()> {
    let mut cursor = Cell::new(1, 1)?;
    let mut snapshots = handle.subscribe();

    loop {
        let state = snapshots.borrow_and_update().clone();
        let view = View::from_state(&state);
        terminal.draw(|f| ui::draw(f, &view, cursor))?;

        // Short poll so timer-driven changes (error expiry) repaint promptly.
        if !event::poll(Duration::from_millis(100))? {
            tokio::task::yield_now().await;
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match handle_key(&mut cursor, key.code, &state) {
            Some(Intent::Quit) => {
                info!("User quit");
                return Ok(());
            }
            Some(Intent::Move(cell)) => {
                debug!(cell = %cell, label = cell.label(), "Cell activated");
                handle.attempt_move(cell)?;
            }
            Some(Intent::Reset) => {
                info!("Resetting board");
                handle.reset()?;
            }
            None => {}
        }

        // Let the runtime apply the intent before the next frame.
        tokio::task::yield_now().await;
    }
}
