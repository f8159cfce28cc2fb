//! Level data model: positions, tiles, entities, the event ring, and the
//! [`Level`] aggregate that ties them together.

mod common;
mod entities;
mod events;
mod level;
mod tile;

pub use common::{CardinalDirection, PixelPosition, Position};
pub use entities::{Entity, Monster, MonsterKind, Player};
pub use events::{EventLog, EventWalk};
pub use level::Level;
pub use tile::{Tile, TileKind};
