//! Snapshot → draw command translation.
//!
//! Rendering is split from presentation: [`Renderer`] produces a [`Frame`]
//! of backend-neutral [`DrawCommand`]s, and a [`Surface`](crate::Surface)
//! puts them on screen.

mod event_log;
mod frame;
mod scene;
pub mod variant;

pub use event_log::EventPanel;
pub use frame::{Color, DrawCommand, Frame, Rect, Tint};
pub use scene::Renderer;
