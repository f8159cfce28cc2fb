//! Glyph colours for the terminal renderer.
//!
//! The terminal has no sprite atlas, so each glyph is drawn as itself in a
//! base colour which the frame's tint then modulates.

use client_frontend_core::{Color, Tint};
use ratatui::style::Color as TermColor;

#[derive(Clone, Copy, Debug, Default)]
pub struct Theme;

impl Theme {
    /// Background used for the event log panel.
    pub const PANEL: TermColor = TermColor::Rgb(18, 18, 18);

    pub fn glyph_color(&self, glyph: char) -> Color {
        match glyph {
            '#' => Color::rgb(170, 170, 170),
            '.' => Color::rgb(110, 90, 70),
            '|' | '/' => Color::rgb(181, 121, 51),
            '@' => Color::rgb(255, 220, 64),
            'R' => Color::rgb(230, 96, 96),
            'S' => Color::rgb(200, 90, 220),
            _ => Color::rgb(235, 235, 235),
        }
    }

    pub fn sprite(&self, glyph: char, tint: Tint) -> TermColor {
        to_term(tint.apply(self.glyph_color(glyph)))
    }

    pub fn text(&self, color: Color) -> TermColor {
        to_term(color)
    }
}

fn to_term(color: Color) -> TermColor {
    TermColor::Rgb(color.r, color.g, color.b)
}
