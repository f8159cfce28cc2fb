use tracing::debug;

use game_core::{GameConfig, Level, Position};

use super::event_log::EventPanel;
use super::frame::{DrawCommand, Frame, Rect, Tint};
use super::variant::variant_index;
use crate::atlas::AtlasIndex;
use crate::config::RenderConfig;
use crate::surface::Viewport;

/// Builds frames from level snapshots. Owned by a single presentation.
#[derive(Clone, Debug)]
pub struct Renderer {
    atlas: AtlasIndex,
    config: RenderConfig,
}

impl Renderer {
    pub fn new(atlas: AtlasIndex, config: RenderConfig) -> Self {
        Self { atlas, config }
    }

    pub fn atlas(&self) -> &AtlasIndex {
        &self.atlas
    }

    /// Draw order: terrain (with overlays), visible monsters, the player,
    /// then the event log panel.
    pub fn render(&self, level: &Level, offset: (i32, i32), viewport: Viewport) -> Frame {
        let mut frame = Frame::new(viewport);
        let tile_size = level.tile_size();

        for (position, tile) in level.cells() {
            let Some(glyph) = tile.glyph() else {
                continue;
            };
            if !tile.is_visible() && !tile.is_seen() {
                continue;
            }

            let dst = cell_rect(position, tile_size, offset);
            let tint = if level.is_highlighted(position) {
                Tint::DEBUG
            } else if !tile.is_visible() {
                Tint::FADED
            } else {
                Tint::NONE
            };

            match self.atlas.variants(glyph) {
                Some(variants) => {
                    let index = variant_index(glyph, position, self.config.variant_seed, variants.len());
                    frame.push(DrawCommand::Sprite {
                        glyph,
                        src: variants[index],
                        dst,
                        tint,
                    });
                }
                None => debug!(%glyph, %position, "glyph missing from atlas"),
            }

            if let Some(overlay) = tile.overlay_glyph() {
                self.push_first(&mut frame, overlay, dst, tint);
            }
        }

        for (position, monster) in &level.monsters {
            if level.tile(*position).is_some_and(|tile| tile.is_visible()) {
                let dst = cell_rect(*position, tile_size, offset);
                self.push_first(&mut frame, monster.glyph(), dst, Tint::NONE);
            }
        }

        let player = level.player.pixel_position(tile_size);
        let dst = Rect::new(player.x + offset.0, player.y + offset.1, tile_size, tile_size);
        self.push_first(&mut frame, GameConfig::PLAYER_GLYPH, dst, Tint::NONE);

        EventPanel::layout(viewport, self.config.line_height).draw(&level.events, &mut frame);
        frame
    }

    fn push_first(&self, frame: &mut Frame, glyph: char, dst: Rect, tint: Tint) {
        match self.atlas.first(glyph) {
            Some(src) => frame.push(DrawCommand::Sprite {
                glyph,
                src,
                dst,
                tint,
            }),
            None => debug!(%glyph, "glyph missing from atlas"),
        }
    }
}

fn cell_rect(position: Position, tile_size: u32, offset: (i32, i32)) -> Rect {
    let pixels = position.to_pixels(tile_size);
    Rect::new(pixels.x + offset.0, pixels.y + offset.1, tile_size, tile_size)
}
