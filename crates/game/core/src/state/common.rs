use std::fmt;

/// Discrete grid position expressed in tile coordinates.
///
/// `y` grows downwards: row 0 is the first line of the level text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring position one step in `direction`.
    pub fn step(self, direction: CardinalDirection) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Converts grid coordinates to pixel coordinates.
    pub fn to_pixels(self, tile_size: u32) -> PixelPosition {
        let tile = tile_size as i32;
        PixelPosition {
            x: self.x * tile,
            y: self.y * tile,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Pixel-space coordinates (`grid * tile_size`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct PixelPosition {
    pub x: i32,
    pub y: i32,
}

/// Movement direction on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, -1),
            CardinalDirection::South => (0, 1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
        }
    }
}
