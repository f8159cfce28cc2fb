use crate::config::GameConfig;

use super::common::{PixelPosition, Position};

/// Anything that occupies a grid cell and is drawn with a single glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub position: Position,
    pub glyph: char,
}

impl Entity {
    pub fn new(position: Position, glyph: char) -> Self {
        Self { position, glyph }
    }
}

/// The controllable character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub entity: Entity,
}

impl Player {
    pub fn new(position: Position) -> Self {
        Self {
            entity: Entity::new(position, GameConfig::PLAYER_GLYPH),
        }
    }

    pub fn position(&self) -> Position {
        self.entity.position
    }

    /// Pixel-space coordinates used for sprite placement.
    pub fn pixel_position(&self, tile_size: u32) -> PixelPosition {
        self.entity.position.to_pixels(tile_size)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Position::ORIGIN)
    }
}

/// Monster templates recognised by the level loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum MonsterKind {
    Rat,
    Spider,
}

impl MonsterKind {
    pub fn glyph(self) -> char {
        match self {
            MonsterKind::Rat => 'R',
            MonsterKind::Spider => 'S',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            'R' => Some(MonsterKind::Rat),
            'S' => Some(MonsterKind::Spider),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monster {
    pub entity: Entity,
    pub kind: MonsterKind,
}

impl Monster {
    pub fn new(kind: MonsterKind, position: Position) -> Self {
        Self {
            entity: Entity::new(position, kind.glyph()),
            kind,
        }
    }

    pub fn position(&self) -> Position {
        self.entity.position
    }

    pub fn glyph(&self) -> char {
        self.entity.glyph
    }
}
