use crate::state::{CardinalDirection, Level, Position};

/// Result of trying to move the player one tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { to: Position },
    /// The destination was a closed door; it is now open and the player stayed put.
    OpenedDoor { at: Position },
    /// The destination is not traversable. Nothing changed.
    Blocked,
}

impl MoveOutcome {
    /// Whether the outcome changes what the player can see.
    pub fn changes_view(self) -> bool {
        !matches!(self, MoveOutcome::Blocked)
    }
}

pub(super) fn move_player(level: &mut Level, direction: CardinalDirection) -> MoveOutcome {
    let target = level.player.position().step(direction);

    if level.monster_at(target).is_some() {
        return MoveOutcome::Blocked;
    }

    let Some(tile) = level.tile_mut(target) else {
        return MoveOutcome::Blocked;
    };

    if tile.open_door() {
        return MoveOutcome::OpenedDoor { at: target };
    }
    if !tile.kind().is_passable() {
        return MoveOutcome::Blocked;
    }

    level.player.entity.position = target;
    MoveOutcome::Moved { to: target }
}
