//! Tests for the async runtime, on tokio's paused clock.

use std::time::Duration;
use tictactoe_store::{AppState, Cell, GameRuntime, GameSettings, Player, SQUARE_TAKEN, Square};
use tokio::time::{Instant, sleep, timeout};

fn cell(x: usize, y: usize) -> Cell {
    Cell::new(x, y).expect("cell on board")
}

#[tokio::test(start_paused = true)]
async fn test_move_reject_and_error_expiry() {
    let (runtime, handle) = GameRuntime::new(&GameSettings::default());
    runtime.spawn();
    let mut snapshots = handle.subscribe();

    // Accepted move
    handle.attempt_move(cell(0, 0)).unwrap();
    snapshots.changed().await.unwrap();
    let state = handle.state();
    assert_eq!(state.board().get(cell(0, 0)), Square::Occupied(Player::X));
    assert_eq!(*state.player(), Player::O);

    // Same square again
    handle.attempt_move(cell(0, 0)).unwrap();
    snapshots.changed().await.unwrap();
    let rejected = handle.state();
    assert_eq!(rejected.board(), state.board());
    assert_eq!(*rejected.player(), Player::O);
    assert_eq!(rejected.error().as_deref(), Some(SQUARE_TAKEN));

    // Past the clear delay
    sleep(Duration::from_millis(2100)).await;
    assert_eq!(*handle.state().error(), None);
    assert_eq!(handle.state().board(), state.board());
}

#[tokio::test(start_paused = true)]
async fn test_error_clears_at_configured_delay() {
    let settings = GameSettings::default().with_error_clear_delay_ms(500);
    let (runtime, handle) = GameRuntime::new(&settings);
    runtime.spawn();
    let mut snapshots = handle.subscribe();

    handle.attempt_move(cell(1, 1)).unwrap();
    snapshots.changed().await.unwrap();
    handle.attempt_move(cell(1, 1)).unwrap();
    snapshots.changed().await.unwrap();
    assert!(handle.state().error().is_some());

    let start = Instant::now();
    timeout(Duration::from_secs(1), snapshots.changed())
        .await
        .expect("error cleared within a second")
        .unwrap();
    assert!(start.elapsed() >= Duration::from_millis(500));
    assert_eq!(*handle.state().error(), None);
}

#[tokio::test(start_paused = true)]
async fn test_earlier_timer_clears_later_error() {
    let (runtime, handle) = GameRuntime::new(&GameSettings::default());
    runtime.spawn();
    let mut snapshots = handle.subscribe();

    handle.attempt_move(cell(2, 2)).unwrap();
    snapshots.changed().await.unwrap();

    let start = Instant::now();
    handle.attempt_move(cell(2, 2)).unwrap();
    snapshots.changed().await.unwrap();

    sleep(Duration::from_secs(1)).await;
    handle.attempt_move(cell(2, 2)).unwrap();
    // Error text is unchanged, so the second report publishes nothing new.
    sleep(Duration::from_millis(10)).await;
    assert_eq!(handle.state().error().as_deref(), Some(SQUARE_TAKEN));

    // The first timer fires at 2s even though an error was reported at 1s.
    snapshots.changed().await.unwrap();
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(2));
    assert!(elapsed < Duration::from_secs(3));
    assert_eq!(*handle.state().error(), None);
}

#[tokio::test(start_paused = true)]
async fn test_win_then_reset() {
    let (runtime, handle) = GameRuntime::new(&GameSettings::default());
    runtime.spawn();
    let mut snapshots = handle.subscribe();

    for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
        handle.attempt_move(cell(x, y)).unwrap();
        snapshots.changed().await.unwrap();
    }
    assert_eq!(*handle.state().winner(), Some(Player::X));

    handle.reset().unwrap();
    snapshots.changed().await.unwrap();
    assert_eq!(handle.state(), AppState::new());
}

#[tokio::test(start_paused = true)]
async fn test_runtime_stops_when_handles_dropped() {
    let (runtime, handle) = GameRuntime::new(&GameSettings::default());
    let join = runtime.spawn();
    let mut snapshots = handle.subscribe();

    // Leave a timer pending; it must not keep the runtime alive.
    handle.attempt_move(cell(0, 0)).unwrap();
    snapshots.changed().await.unwrap();
    handle.attempt_move(cell(0, 0)).unwrap();
    snapshots.changed().await.unwrap();

    drop(handle);
    timeout(Duration::from_millis(100), join)
        .await
        .expect("runtime stopped")
        .unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_dispatch_fails_after_runtime_stops() {
    let (runtime, handle) = GameRuntime::new(&GameSettings::default());
    drop(runtime);

    let err = handle.attempt_move(cell(0, 0)).unwrap_err();
    assert!(err.message.contains("not running"));
}
