//! Cross-frontend primitives for presenting the dungeon.
//!
//! Everything here is independent of a concrete window system: the atlas
//! index, the follow camera, the renderer that turns a level snapshot into
//! [`render::Frame`] draw commands, keyboard edge detection, and the
//! [`PresentationLoop`] that ties a [`Surface`] to the runtime channels.
pub mod atlas;
pub mod camera;
pub mod config;
pub mod frontend;
pub mod input;
pub mod presentation;
pub mod render;
pub mod surface;

pub use atlas::{AtlasError, AtlasIndex};
pub use camera::Camera;
pub use config::FrontendConfig;
pub use frontend::Frontend;
pub use input::{Key, KeyboardState};
pub use presentation::{LoopStatus, PresentationLoop};
pub use render::{Color, DrawCommand, Frame, Rect, Renderer, Tint};
pub use surface::{Focus, HeadlessSurface, Surface, Viewport, WindowEvent};
