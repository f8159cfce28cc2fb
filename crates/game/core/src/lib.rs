//! Level data model and game rules shared by the runtime and the frontends.
//!
//! `game-core` defines the world ([`Level`], tiles, entities, the event ring),
//! the [`Input`] messages presentation instances send back, and the
//! [`engine::LevelEngine`] that applies those inputs. It performs no I/O; the
//! level text format is handled by `game-content`.
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod state;

pub use config::GameConfig;
pub use engine::{LevelEngine, MoveOutcome};
pub use error::{ErrorSeverity, LevelError};
pub use input::{Input, PresentationId};
pub use state::{
    CardinalDirection, Entity, EventLog, Level, Monster, MonsterKind, PixelPosition, Player,
    Position, Tile, TileKind,
};
