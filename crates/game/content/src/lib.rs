//! Level content and loaders.
//!
//! Turns level text files into [`game_core::Level`] values. Parsing is pure
//! ([`LevelLoader::parse`]); file access goes through [`LevelLoader::load`],
//! which wraps failures with the offending path.

pub mod loaders;

pub use loaders::{LevelLoader, LoadResult};
