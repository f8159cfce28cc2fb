//! Glue code tying the runtime handle, the atlas and the terminal together.
use anyhow::{Context, Result};
use async_trait::async_trait;

use client_frontend_core::{AtlasIndex, Frontend, FrontendConfig, PresentationLoop};
use runtime::RuntimeHandle;

use crate::presentation::{TerminalSurface, terminal};

/// Terminal frontend: one presentation instance shown in the terminal.
pub struct CliFrontend {
    config: FrontendConfig,
}

impl CliFrontend {
    pub fn new(config: FrontendConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        let level = handle.query_level().await?;
        let tile_size = level.tile_size();
        let atlas = AtlasIndex::load(&self.config.atlas_path, tile_size)?;
        tracing::info!(glyphs = atlas.len(), "atlas loaded");

        let channels = handle
            .attach_presentation()
            .await
            .context("Failed to attach terminal presentation")?;
        let id = channels.id();

        let terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let surface = TerminalSurface::new(terminal, tile_size);
        PresentationLoop::new(surface, channels, atlas, &self.config)
            .run()
            .await?;

        terminal::restore()?;
        tracing::info!(presentation = %id, "CLI frontend exiting");

        Ok(())
    }
}
