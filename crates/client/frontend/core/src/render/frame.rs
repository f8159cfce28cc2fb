use crate::surface::Viewport;

/// Pixel rectangle. Destinations may lie partly off screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        let (ax2, ay2) = (self.x + self.w as i32, self.y + self.h as i32);
        let (bx2, by2) = (other.x + other.w as i32, other.y + other.h as i32);
        self.x < bx2 && other.x < ax2 && self.y < by2 && other.y < ay2
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }
}

/// Colour modulation applied to a sprite, channel by channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tint(pub u8, pub u8, pub u8);

impl Tint {
    pub const NONE: Tint = Tint(255, 255, 255);
    /// Debug-highlighted cells.
    pub const DEBUG: Tint = Tint(128, 0, 0);
    /// Remembered cells outside the field of view.
    pub const FADED: Tint = Tint(128, 128, 128);

    /// Multiplies `color` by the tint, keeping alpha.
    pub fn apply(self, color: Color) -> Color {
        let scale = |c: u8, t: u8| ((c as u16 * t as u16) / 255) as u8;
        Color::rgba(
            scale(color.r, self.0),
            scale(color.g, self.1),
            scale(color.b, self.2),
            color.a,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    /// Copy `src` from the atlas to `dst`, modulated by `tint`.
    Sprite {
        glyph: char,
        src: Rect,
        dst: Rect,
        tint: Tint,
    },
    /// Solid (possibly translucent) rectangle.
    Fill { rect: Rect, color: Color },
    /// One line of text with its top-left corner at `(x, y)`.
    Text {
        text: String,
        x: i32,
        y: i32,
        color: Color,
    },
}

/// Ordered draw commands for one presentation frame. Later commands paint
/// over earlier ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn sprites(&self) -> impl Iterator<Item = (char, Rect, Tint)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Sprite {
                glyph, dst, tint, ..
            } => Some((*glyph, *dst, *tint)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
