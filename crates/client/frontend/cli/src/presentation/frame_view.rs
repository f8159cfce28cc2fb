use client_frontend_core::{DrawCommand, Frame, Rect as PixelRect};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::theme::Theme;

/// Widget painting a [`Frame`] with one terminal cell per tile.
pub struct FrameView<'a> {
    frame: &'a Frame,
    tile_size: u32,
    theme: Theme,
}

impl<'a> FrameView<'a> {
    pub fn new(frame: &'a Frame, tile_size: u32, theme: Theme) -> Self {
        Self {
            frame,
            tile_size: tile_size.max(1),
            theme,
        }
    }

    /// Terminal cell covering the pixel `(x, y)`, if it lies inside `area`.
    fn cell(&self, area: Rect, x: i32, y: i32) -> Option<(u16, u16)> {
        let tile = self.tile_size as i32;
        let col = x.div_euclid(tile);
        let row = y.div_euclid(tile);
        if col < 0 || row < 0 || col >= area.width as i32 || row >= area.height as i32 {
            return None;
        }
        Some((area.x + col as u16, area.y + row as u16))
    }

    fn fill(&self, area: Rect, rect: PixelRect, buf: &mut Buffer) {
        let tile = self.tile_size as i32;
        let cols = rect.x.div_euclid(tile)..(rect.x + rect.w as i32 + tile - 1).div_euclid(tile);
        let rows = rect.y.div_euclid(tile)..(rect.y + rect.h as i32 + tile - 1).div_euclid(tile);
        for row in rows {
            for col in cols.clone() {
                if let Some(position) = self.cell(area, col * tile, row * tile) {
                    if let Some(cell) = buf.cell_mut(position) {
                        cell.set_char(' ').set_bg(Theme::PANEL);
                    }
                }
            }
        }
    }
}

impl Widget for FrameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let screen = PixelRect::new(
            0,
            0,
            area.width as u32 * self.tile_size,
            area.height as u32 * self.tile_size,
        );

        for command in &self.frame.commands {
            match command {
                DrawCommand::Sprite {
                    glyph, dst, tint, ..
                } => {
                    if !dst.intersects(&screen) {
                        continue;
                    }
                    if let Some(position) = self.cell(area, dst.x, dst.y) {
                        if let Some(cell) = buf.cell_mut(position) {
                            cell.set_char(*glyph).set_fg(self.theme.sprite(*glyph, *tint));
                        }
                    }
                }
                DrawCommand::Fill { rect, .. } => self.fill(area, *rect, buf),
                DrawCommand::Text { text, x, y, color } => {
                    let Some((col, row)) = self.cell(area, *x, *y) else {
                        continue;
                    };
                    let max_width = (area.x + area.width).saturating_sub(col) as usize;
                    let style = Style::default().fg(self.theme.text(*color));
                    buf.set_stringn(col, row, text, max_width, style);
                }
            }
        }
    }
}
