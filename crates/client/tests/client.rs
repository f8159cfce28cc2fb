//! Client lifecycle with a scripted headless frontend.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use client_frontend_core::{
    AtlasIndex, Frontend, FrontendConfig, HeadlessSurface, Key, LoopStatus, PresentationLoop,
    Viewport, WindowEvent,
};
use dungeon_client::Client;
use game_content::LevelLoader;
use game_core::GameConfig;
use runtime::{Runtime, RuntimeConfig, RuntimeHandle, SessionOutcome};

/// Walks right a few times, then closes or quits its window.
struct ScriptedFrontend {
    finish_with: WindowEvent,
    steps: usize,
}

#[async_trait]
impl Frontend for ScriptedFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        let channels = handle.attach_presentation().await?;
        let config = FrontendConfig {
            frame_delay: Duration::from_millis(1),
            ..FrontendConfig::default()
        };
        let atlas = AtlasIndex::parse("@0,0,1\n.1,0,1\n#2,0,1", 32)?;
        let mut window = PresentationLoop::new(
            HeadlessSurface::new(Viewport::new(320, 240)),
            channels,
            atlas,
            &config,
        );

        for step in 0..self.steps {
            if step % 2 == 0 {
                window.surface_mut().press(Key::Right);
            } else {
                window.surface_mut().release(Key::Right);
            }
            window.step()?;
            tokio::time::sleep(Duration::from_millis(2)).await;
        }

        window.surface_mut().push_event(self.finish_with);
        while window.step()? == LoopStatus::Running {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        Ok(())
    }
}

struct FailingFrontend;

#[async_trait]
impl Frontend for FailingFrontend {
    async fn run(&mut self, _handle: RuntimeHandle) -> Result<()> {
        anyhow::bail!("display unavailable")
    }
}

async fn runtime() -> Runtime {
    let level = LevelLoader::parse("#######\n#P....#\n#######", &GameConfig::default()).unwrap();
    let config = RuntimeConfig {
        tick_interval: Duration::from_millis(2),
        ..RuntimeConfig::default()
    };
    Runtime::builder().config(config).level(level).build().await.unwrap()
}

#[tokio::test]
async fn closing_the_only_window_ends_the_session() {
    let frontend = ScriptedFrontend {
        finish_with: WindowEvent::Close,
        steps: 6,
    };
    let client = Client::builder()
        .runtime(runtime().await)
        .frontend(frontend)
        .build()
        .unwrap();

    let outcome = tokio::time::timeout(Duration::from_secs(2), client.run())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(outcome, SessionOutcome::AllWindowsClosed);
}

#[tokio::test]
async fn quitting_ends_the_session() {
    let frontend = ScriptedFrontend {
        finish_with: WindowEvent::Quit,
        steps: 2,
    };
    let client = Client::builder()
        .runtime(runtime().await)
        .frontend(frontend)
        .build()
        .unwrap();

    let outcome = client.run().await.unwrap();
    assert_eq!(outcome, SessionOutcome::Quit);
}

#[tokio::test]
async fn frontend_errors_still_stop_the_runtime() {
    let runtime = runtime().await;
    let handle = runtime.handle();
    let client = Client::builder()
        .runtime(runtime)
        .frontend(FailingFrontend)
        .build()
        .unwrap();

    let err = client.run().await.unwrap_err();
    assert!(err.to_string().contains("display unavailable"));
    assert!(handle.query_level().await.is_err());
}

#[tokio::test]
async fn builder_requires_both_layers() {
    assert!(Client::builder().frontend(FailingFrontend).build().is_err());
    assert!(Client::builder().runtime(runtime().await).build().is_err());
}
