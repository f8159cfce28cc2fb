//! Glyph → source rectangle index for the sprite atlas.
//!
//! The index file holds one record per line, `<glyph><x>,<y>,<count>`, where
//! `x` and `y` are in tile units. A record expands to `count` tile-sized
//! rectangles laid out left to right, wrapping to the next atlas row after
//! the last column.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use thiserror::Error;

use crate::render::Rect;

/// Number of tile columns in the atlas image.
pub const ATLAS_COLUMNS: u32 = 63;

/// Upper bound on variants per glyph (64 full atlas rows).
pub const MAX_VARIANTS: u32 = ATLAS_COLUMNS * 64;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AtlasError {
    #[error("line {line}: expected `<glyph><x>,<y>,<count>`, found {found:?}")]
    MalformedRecord { line: usize, found: String },

    #[error("line {line}: invalid {field} {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: glyph {glyph:?} declares no variants")]
    NoVariants { line: usize, glyph: char },

    #[error("line {line}: variants of glyph {glyph:?} fall outside the addressable atlas")]
    OutOfRange { line: usize, glyph: char },
}

/// Read-only lookup from glyph to its sprite variants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AtlasIndex {
    entries: HashMap<char, Vec<Rect>>,
}

impl AtlasIndex {
    /// Load and parse an index file.
    pub fn load(path: &Path, tile_size: u32) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read atlas index {}", path.display()))?;
        Self::parse(&text, tile_size)
            .with_context(|| format!("Failed to parse atlas index {}", path.display()))
    }

    pub fn parse(text: &str, tile_size: u32) -> Result<Self, AtlasError> {
        let mut entries = HashMap::new();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let record = raw.trim();
            let mut chars = record.chars();
            let Some(glyph) = chars.next() else {
                continue;
            };

            let fields: Vec<&str> = chars.as_str().split(',').map(str::trim).collect();
            let [x, y, count] = fields.as_slice() else {
                return Err(AtlasError::MalformedRecord {
                    line,
                    found: record.to_string(),
                });
            };

            let x = parse_field(line, "x", x)?;
            let y = parse_field(line, "y", y)?;
            let count = parse_field(line, "variant count", count)?;
            if count == 0 {
                return Err(AtlasError::NoVariants { line, glyph });
            }
            if count > MAX_VARIANTS {
                return Err(AtlasError::OutOfRange { line, glyph });
            }

            let rects =
                expand(x, y, count, tile_size).ok_or(AtlasError::OutOfRange { line, glyph })?;
            entries.insert(glyph, rects);
        }

        Ok(Self { entries })
    }

    /// All variants for `glyph`, never empty when present.
    pub fn variants(&self, glyph: char) -> Option<&[Rect]> {
        self.entries.get(&glyph).map(Vec::as_slice)
    }

    pub fn first(&self, glyph: char) -> Option<Rect> {
        self.variants(glyph).and_then(|rects| rects.first().copied())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_field(line: usize, field: &'static str, value: &str) -> Result<u32, AtlasError> {
    value.parse().map_err(|_| AtlasError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}

/// `None` when a rectangle's pixel origin does not fit in `i32`.
fn expand(mut x: u32, mut y: u32, count: u32, tile_size: u32) -> Option<Vec<Rect>> {
    let pixel = |tiles: u32| i32::try_from(tiles.checked_mul(tile_size)?).ok();

    let mut rects = Vec::with_capacity(count as usize);
    for _ in 0..count {
        rects.push(Rect::new(pixel(x)?, pixel(y)?, tile_size, tile_size));
        x = x.checked_add(1)?;
        if x >= ATLAS_COLUMNS {
            x = 0;
            y = y.checked_add(1)?;
        }
    }
    Some(rects)
}
