//! End-to-end sessions against a spawned simulation worker.

use std::time::Duration;

use game_content::LevelLoader;
use game_core::{GameConfig, Input, Level, Position, TileKind};
use runtime::{PresentationChannels, Runtime, RuntimeConfig, SessionOutcome, Snapshot};
use tokio::time::timeout;

const ROOM: &str = "\
#######
#P...|.
#.R..##
#######";

fn level() -> Level {
    LevelLoader::parse(ROOM, &GameConfig::default()).expect("room parses")
}

fn fast_config() -> RuntimeConfig {
    RuntimeConfig {
        tick_interval: Duration::from_millis(2),
        ..RuntimeConfig::default()
    }
}

async fn start() -> Runtime {
    Runtime::builder()
        .config(fast_config())
        .level(level())
        .build()
        .await
        .expect("runtime builds")
}

/// Waits for snapshots until one satisfies `predicate`.
async fn wait_for(
    channels: &mut PresentationChannels,
    predicate: impl Fn(&Snapshot) -> bool,
) -> Snapshot {
    timeout(Duration::from_secs(2), async {
        loop {
            let snapshot = channels
                .next_snapshot()
                .await
                .expect("snapshot stream ended early");
            if predicate(&snapshot) {
                return snapshot;
            }
        }
    })
    .await
    .expect("condition not reached in time")
}

async fn drain_until_closed(channels: &mut PresentationChannels) {
    timeout(Duration::from_secs(2), async {
        while channels.next_snapshot().await.is_some() {}
    })
    .await
    .expect("stream did not close");
}

#[tokio::test]
async fn first_snapshot_carries_welcome_and_fog() {
    let runtime = start().await;
    let mut window = runtime.attach_presentation().await.unwrap();

    let snapshot = wait_for(&mut window, |_| true).await;
    assert_eq!(snapshot.events.iter().next(), Some("Welcome to the dungeon"));
    assert!(snapshot.tile(Position::new(1, 1)).unwrap().is_visible());
    assert!(snapshot.events.iter().any(|event| event == "A Rat comes into view"));

    assert_eq!(runtime.shutdown().await.unwrap(), SessionOutcome::Quit);
}

#[tokio::test]
async fn movement_reaches_every_window() {
    let runtime = start().await;
    let mut a = runtime.attach_presentation().await.unwrap();
    let mut b = runtime.attach_presentation().await.unwrap();
    assert_ne!(a.id(), b.id());

    assert!(a.send_input(Input::Right));
    let moved = |s: &Snapshot| s.player.position() == Position::new(2, 1);
    wait_for(&mut a, moved).await;
    wait_for(&mut b, moved).await;

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn closing_one_window_keeps_the_other_alive() {
    let runtime = start().await;
    let mut a = runtime.attach_presentation().await.unwrap();
    let mut b = runtime.attach_presentation().await.unwrap();

    assert!(a.close_window());
    drain_until_closed(&mut a).await;

    assert!(b.send_input(Input::Down));
    wait_for(&mut b, |s| s.player.position() == Position::new(1, 2)).await;

    // A second close for the same window is ignored.
    runtime.handle().send_input(Input::CloseWindow(a.id())).await.unwrap();
    assert!(b.send_input(Input::Up));
    wait_for(&mut b, |s| s.player.position() == Position::new(1, 1)).await;

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn last_window_closing_ends_the_session() {
    let runtime = start().await;
    let mut only = runtime.attach_presentation().await.unwrap();

    assert!(only.close_window());
    drain_until_closed(&mut only).await;

    let outcome = timeout(Duration::from_secs(2), runtime.wait())
        .await
        .expect("worker stops")
        .unwrap();
    assert_eq!(outcome, SessionOutcome::AllWindowsClosed);
}

#[tokio::test]
async fn quit_closes_every_stream() {
    let runtime = start().await;
    let handle = runtime.handle();
    let mut a = runtime.attach_presentation().await.unwrap();
    let mut b = runtime.attach_presentation().await.unwrap();

    assert!(b.send_input(Input::QuitGame));
    drain_until_closed(&mut a).await;
    drain_until_closed(&mut b).await;

    assert_eq!(runtime.wait().await.unwrap(), SessionOutcome::Quit);
    assert!(handle.query_level().await.is_err());
}

#[tokio::test]
async fn doors_open_on_bump_then_admit_the_player() {
    let runtime = start().await;
    let handle = runtime.handle();
    let mut window = runtime.attach_presentation().await.unwrap();

    for _ in 0..3 {
        handle.send_input(Input::Right).await.unwrap();
    }
    wait_for(&mut window, |s| s.player.position() == Position::new(4, 1)).await;

    handle.send_input(Input::Right).await.unwrap();
    let opened = wait_for(&mut window, |s| {
        s.tile(Position::new(5, 1)).unwrap().kind() == TileKind::Door { open: true }
    })
    .await;
    assert_eq!(opened.player.position(), Position::new(4, 1));
    assert_eq!(opened.events.iter().last(), Some("Opened door"));

    handle.send_input(Input::Right).await.unwrap();
    wait_for(&mut window, |s| s.player.position() == Position::new(5, 1)).await;

    let level = handle.query_level().await.unwrap();
    assert_eq!(level.player.position(), Position::new(5, 1));
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn walls_and_monsters_reject_moves() {
    let runtime = start().await;
    let handle = runtime.handle();
    let mut window = runtime.attach_presentation().await.unwrap();

    handle.send_input(Input::Up).await.unwrap();
    handle.send_input(Input::Left).await.unwrap();
    handle.send_input(Input::Down).await.unwrap();
    handle.send_input(Input::Right).await.unwrap();
    // (1,1) -> wall, wall, (1,2), then the rat at (2,2) blocks.
    wait_for(&mut window, |s| s.player.position() == Position::new(1, 2)).await;

    handle.send_input(Input::Up).await.unwrap();
    let snapshot = wait_for(&mut window, |s| s.player.position() == Position::new(1, 1)).await;
    assert!(snapshot.monster_at(Position::new(2, 2)).is_some());

    runtime.shutdown().await.unwrap();
}
