//! Presentation loops driven against a live simulation.

use std::time::Duration;

use client_frontend_core::{
    AtlasIndex, Focus, FrontendConfig, HeadlessSurface, Key, LoopStatus, PresentationLoop,
    Viewport, WindowEvent,
};
use game_content::LevelLoader;
use game_core::{GameConfig, Position};
use runtime::{Runtime, RuntimeConfig, RuntimeHandle, SessionOutcome};
use tokio::time::{sleep, timeout};

const LEVEL: &str = "\
##########
#P.......#
#........#
##########";

const ATLAS: &str = "\
#0,0,2
.2,0,3
@5,0,1
|6,0,1
/7,0,1
";

async fn start() -> Runtime {
    let config = RuntimeConfig {
        tick_interval: Duration::from_millis(2),
        ..RuntimeConfig::default()
    };
    let level = LevelLoader::parse(LEVEL, &GameConfig::default()).unwrap();
    Runtime::builder().config(config).level(level).build().await.unwrap()
}

async fn window(handle: &RuntimeHandle) -> PresentationLoop<HeadlessSurface> {
    let channels = handle.attach_presentation().await.unwrap();
    let atlas = AtlasIndex::parse(ATLAS, 32).unwrap();
    PresentationLoop::new(
        HeadlessSurface::new(Viewport::new(640, 480)),
        channels,
        atlas,
        &FrontendConfig::default(),
    )
}

/// Steps the loop until `done` holds, yielding between steps.
async fn step_until(
    window: &mut PresentationLoop<HeadlessSurface>,
    done: impl Fn(&PresentationLoop<HeadlessSurface>) -> bool,
) -> LoopStatus {
    timeout(Duration::from_secs(2), async {
        loop {
            let status = window.step().unwrap();
            if status == LoopStatus::Finished || done(window) {
                return status;
            }
            sleep(Duration::from_millis(1)).await;
        }
    })
    .await
    .expect("condition not reached in time")
}

fn player_sprite(window: &PresentationLoop<HeadlessSurface>) -> Option<(i32, i32)> {
    let frame = window.surface().last_frame()?;
    frame
        .sprites()
        .filter(|(glyph, ..)| *glyph == '@')
        .map(|(_, dst, _)| (dst.x, dst.y))
        .last()
}

#[tokio::test]
async fn first_step_renders_the_current_level() {
    let runtime = start().await;
    let mut window = window(&runtime.handle()).await;

    step_until(&mut window, |w| w.frames_rendered() > 0).await;

    let frame = window.surface().last_frame().unwrap();
    assert!(frame.texts().any(|text| text == "Welcome to the dungeon"));
    // Camera snaps to the player, so the player sits in the middle.
    assert_eq!(player_sprite(&window), Some((320, 240)));
    assert_eq!(window.camera().center(), Some(Position::new(1, 1)));

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn key_press_moves_player_once() {
    let runtime = start().await;
    let handle = runtime.handle();
    let mut window = window(&handle).await;
    step_until(&mut window, |w| w.frames_rendered() > 0).await;

    window.surface_mut().press(Key::Right);
    for _ in 0..20 {
        window.step().unwrap();
        sleep(Duration::from_millis(2)).await;
    }
    window.surface_mut().release(Key::Right);
    step_until(&mut window, |w| player_sprite(w) == Some((352, 240))).await;

    let level = handle.query_level().await.unwrap();
    assert_eq!(level.player.position(), Position::new(2, 1));

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn unfocused_windows_send_nothing() {
    let runtime = start().await;
    let handle = runtime.handle();
    let mut window = window(&handle).await;
    step_until(&mut window, |w| w.frames_rendered() > 0).await;

    window.surface_mut().set_focus(Focus::KEYBOARD);
    window.surface_mut().press(Key::Down);
    for _ in 0..10 {
        window.step().unwrap();
        sleep(Duration::from_millis(2)).await;
    }

    let level = handle.query_level().await.unwrap();
    assert_eq!(level.player.position(), Position::new(1, 1));

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn closing_one_window_leaves_the_other_running() {
    let runtime = start().await;
    let handle = runtime.handle();
    let mut a = window(&handle).await;
    let mut b = window(&handle).await;

    a.surface_mut().push_event(WindowEvent::Close);
    let status = step_until(&mut a, |_| false).await;
    assert_eq!(status, LoopStatus::Finished);

    b.surface_mut().press(Key::Down);
    step_until(&mut b, |w| player_sprite(w) == Some((320, 272))).await;
    assert_eq!(b.step().unwrap(), LoopStatus::Running);

    b.surface_mut().push_event(WindowEvent::Close);
    assert_eq!(step_until(&mut b, |_| false).await, LoopStatus::Finished);
    assert_eq!(runtime.wait().await.unwrap(), SessionOutcome::AllWindowsClosed);
}

#[tokio::test]
async fn quit_event_ends_every_window() {
    let runtime = start().await;
    let handle = runtime.handle();
    let mut a = window(&handle).await;
    let b = window(&handle).await;

    a.surface_mut().push_event(WindowEvent::Quit);
    let b_task = tokio::spawn(b.run());

    assert_eq!(step_until(&mut a, |_| false).await, LoopStatus::Finished);
    let surface = timeout(Duration::from_secs(2), b_task)
        .await
        .expect("second window stops")
        .unwrap()
        .unwrap();
    assert!(!surface.frames().is_empty());
    assert_eq!(runtime.wait().await.unwrap(), SessionOutcome::Quit);
}
