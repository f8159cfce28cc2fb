//! Per-window presentation loop.
//!
//! Each iteration forwards window events, takes the newest snapshot if there
//! is one (never waiting), renders it, and turns fresh key presses into
//! input for the simulation. The loop ends when the simulation drops this
//! window's snapshot sender.

use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use game_core::{Input, Level, PresentationId};
use runtime::{PresentationChannels, SnapshotPoll};

use crate::atlas::AtlasIndex;
use crate::camera::Camera;
use crate::config::FrontendConfig;
use crate::input::KeyboardState;
use crate::render::Renderer;
use crate::surface::{Focus, Surface, WindowEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopStatus {
    Running,
    /// The snapshot stream ended.
    Finished,
}

pub struct PresentationLoop<S: Surface> {
    surface: S,
    channels: PresentationChannels,
    renderer: Renderer,
    camera: Camera,
    previous_keys: KeyboardState,
    frame_delay: Duration,
    frames_rendered: u64,
}

impl<S: Surface> PresentationLoop<S> {
    pub fn new(
        surface: S,
        channels: PresentationChannels,
        atlas: AtlasIndex,
        config: &FrontendConfig,
    ) -> Self {
        Self {
            surface,
            channels,
            renderer: Renderer::new(atlas, config.render.clone()),
            camera: Camera::new(config.camera.deadzone),
            previous_keys: KeyboardState::default(),
            frame_delay: config.frame_delay,
            frames_rendered: 0,
        }
    }

    pub fn id(&self) -> PresentationId {
        self.channels.id()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// One non-blocking iteration.
    pub fn step(&mut self) -> Result<LoopStatus> {
        for event in self.surface.poll_events()? {
            match event {
                WindowEvent::Quit => {
                    info!(presentation = %self.id(), "quit requested");
                    self.channels.send_input(Input::QuitGame);
                }
                WindowEvent::Close => {
                    info!(presentation = %self.id(), "window closed");
                    self.channels.close_window();
                }
            }
        }

        match self.channels.poll_snapshot() {
            SnapshotPoll::Fresh(level) => self.draw(&level)?,
            SnapshotPoll::Unchanged => {}
            SnapshotPoll::Closed => return Ok(LoopStatus::Finished),
        }

        let keys = self.surface.keyboard_state();
        if self.surface.focus().contains(Focus::KEYBOARD | Focus::POINTER) {
            let input = keys.directional_input(&self.previous_keys);
            if input != Input::None {
                debug!(presentation = %self.id(), %input, "forwarding input");
                self.channels.send_input(input);
            }
        }
        self.previous_keys = keys;

        Ok(LoopStatus::Running)
    }

    /// Steps until the snapshot stream ends, sleeping the frame delay between
    /// iterations. Returns the surface so callers can tear it down.
    pub async fn run(mut self) -> Result<S> {
        info!(presentation = %self.id(), "presentation loop started");
        while self.step()? == LoopStatus::Running {
            tokio::time::sleep(self.frame_delay).await;
        }
        info!(
            presentation = %self.id(),
            frames = self.frames_rendered,
            "presentation loop finished"
        );
        Ok(self.surface)
    }

    fn draw(&mut self, level: &Level) -> Result<()> {
        self.camera.follow(level.player.position());
        let viewport = self.surface.viewport();
        let offset = self.camera.offset(viewport, level.tile_size());
        let frame = self.renderer.render(level, offset, viewport);
        self.surface.present(&frame)?;
        self.frames_rendered += 1;
        Ok(())
    }
}
