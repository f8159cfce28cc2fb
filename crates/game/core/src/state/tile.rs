//! Grid cells: terrain classification plus per-cell render state.

use crate::config::GameConfig;

/// Canonical terrain classes for level tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    StoneWall,
    DirtFloor,
    /// Doorway. The floor underneath is drawn as the base glyph and the door
    /// itself is carried by the tile's overlay.
    Door { open: bool },
    /// Empty space outside the map. Never drawn, never entered.
    Blank,
    /// Walkable floor drawn with its own glyph.
    Custom(char),
}

impl TileKind {
    /// Glyph used to look up the base sprite in the atlas.
    pub fn glyph(self) -> Option<char> {
        match self {
            TileKind::StoneWall => Some('#'),
            TileKind::DirtFloor | TileKind::Door { .. } => Some('.'),
            TileKind::Blank => None,
            TileKind::Custom(glyph) => Some(glyph),
        }
    }

    pub fn is_passable(self) -> bool {
        match self {
            TileKind::DirtFloor | TileKind::Custom(_) => true,
            TileKind::Door { open } => open,
            TileKind::StoneWall | TileKind::Blank => false,
        }
    }

    /// Whether the tile stops a line of sight (the tile itself stays visible).
    pub fn is_opaque(self) -> bool {
        match self {
            TileKind::StoneWall => true,
            TileKind::Door { open } => !open,
            TileKind::DirtFloor | TileKind::Custom(_) | TileKind::Blank => false,
        }
    }
}

/// One grid cell.
///
/// Visibility is only reachable through [`Tile::set_visible`], which keeps the
/// fog-of-war invariant: a visible tile is always seen, and a seen tile stays
/// seen after it leaves the field of view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    kind: TileKind,
    visible: bool,
    seen: bool,
    overlay: Option<char>,
}

impl Tile {
    pub fn new(kind: TileKind) -> Self {
        let overlay = match kind {
            TileKind::Door { open } => Some(door_glyph(open)),
            _ => None,
        };
        Self {
            kind,
            visible: false,
            seen: false,
            overlay,
        }
    }

    pub const fn blank() -> Self {
        Self {
            kind: TileKind::Blank,
            visible: false,
            seen: false,
            overlay: None,
        }
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn glyph(&self) -> Option<char> {
        self.kind.glyph()
    }

    pub fn overlay_glyph(&self) -> Option<char> {
        self.overlay
    }

    pub fn is_blank(&self) -> bool {
        self.kind == TileKind::Blank
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_seen(&self) -> bool {
        self.seen
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if visible {
            self.seen = true;
        }
    }

    /// Opens a closed door. Returns `false` when the tile is not a closed door.
    pub fn open_door(&mut self) -> bool {
        match self.kind {
            TileKind::Door { open: false } => {
                self.kind = TileKind::Door { open: true };
                self.overlay = Some(door_glyph(true));
                true
            }
            _ => false,
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::blank()
    }
}

fn door_glyph(open: bool) -> char {
    if open {
        GameConfig::OPEN_DOOR_GLYPH
    } else {
        GameConfig::CLOSED_DOOR_GLYPH
    }
}
