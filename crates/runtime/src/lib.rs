//! Runtime orchestration for the tile dungeon.
//!
//! The simulation worker owns the authoritative [`game_core::Level`] and talks
//! to presentation instances only through channels: every presentation gets
//! its own latest-value snapshot channel, and all of them share one bounded
//! input channel back to the simulation.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`channels`] holds the per-presentation channel pair
//! - `workers` keeps the simulation task internal to the crate
pub mod api;
pub mod channels;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle, SessionOutcome};
pub use channels::{PresentationChannels, Snapshot, SnapshotPoll};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
