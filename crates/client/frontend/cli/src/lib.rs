//! Terminal UI frontend for the dungeon.
//!
//! Implements [`client_frontend_core::Frontend`] on top of ratatui and
//! crossterm. The terminal is a single window: each terminal cell shows one
//! tile, and the shared [`client_frontend_core::PresentationLoop`] does the
//! rest.

mod app;
mod config;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::CliConfig;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
