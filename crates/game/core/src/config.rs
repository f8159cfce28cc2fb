/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Edge length of one tile in pixels. Player pixel coordinates and atlas
    /// rectangles are expressed in multiples of this value.
    pub tile_size: u32,
    /// Number of slots in the level's event ring.
    pub event_capacity: usize,
    /// Radius (in tiles) of the player's field of view.
    pub sight_radius: i32,
}

impl GameConfig {
    // ===== glyphs shared by the loader, the engine and the renderer =====
    pub const PLAYER_GLYPH: char = '@';
    pub const PLAYER_START_GLYPH: char = 'P';
    pub const CLOSED_DOOR_GLYPH: char = '|';
    pub const OPEN_DOOR_GLYPH: char = '/';

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TILE_SIZE: u32 = 32;
    pub const DEFAULT_EVENT_CAPACITY: usize = 10;
    pub const DEFAULT_SIGHT_RADIUS: i32 = 7;

    pub fn new() -> Self {
        Self {
            tile_size: Self::DEFAULT_TILE_SIZE,
            event_capacity: Self::DEFAULT_EVENT_CAPACITY,
            sight_radius: Self::DEFAULT_SIGHT_RADIUS,
        }
    }

    pub fn with_event_capacity(mut self, event_capacity: usize) -> Self {
        self.event_capacity = event_capacity.max(1);
        self
    }

    pub fn with_sight_radius(mut self, sight_radius: i32) -> Self {
        self.sight_radius = sight_radius.max(1);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
