//! Follow camera with a deadzone.

use game_core::Position;

use crate::surface::Viewport;

/// Per-presentation camera. The center is in grid units and is initialised
/// lazily from the first player position it sees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Camera {
    center: Option<Position>,
    deadzone: i32,
}

impl Camera {
    pub fn new(deadzone: i32) -> Self {
        Self {
            center: None,
            deadzone,
        }
    }

    pub fn center(&self) -> Option<Position> {
        self.center
    }

    /// Advances the center one frame toward `player` and returns it.
    pub fn follow(&mut self, player: Position) -> Position {
        let next = match self.center {
            None => player,
            Some(center) => step_toward(center, player, self.deadzone),
        };
        self.center = Some(next);
        next
    }

    /// Pixel offset that places the center in the middle of the viewport.
    pub fn offset(&self, viewport: Viewport, tile_size: u32) -> (i32, i32) {
        let center = self.center.unwrap_or(Position::ORIGIN);
        let tile = tile_size as i32;
        (
            viewport.width as i32 / 2 - center.x * tile,
            viewport.height as i32 / 2 - center.y * tile,
        )
    }
}

/// One camera step: moves at most one unit along one axis, checking +X, -X,
/// +Y, -Y in that order, and only when the player is past the deadzone.
pub fn step_toward(center: Position, player: Position, deadzone: i32) -> Position {
    if player.x > center.x + deadzone {
        Position::new(center.x + 1, center.y)
    } else if player.x < center.x - deadzone {
        Position::new(center.x - 1, center.y)
    } else if player.y > center.y + deadzone {
        Position::new(center.x, center.y + 1)
    } else if player.y < center.y - deadzone {
        Position::new(center.x, center.y - 1)
    } else {
        center
    }
}
