//! Terminal rendering and input for the presentation loop.

mod frame_view;
pub mod surface;
pub mod terminal;
pub mod theme;

pub use frame_view::FrameView;
pub use surface::TerminalSurface;
pub use theme::Theme;
