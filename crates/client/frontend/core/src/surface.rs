//! Window abstraction the presentation loop draws to and reads input from.

use std::collections::VecDeque;

use anyhow::Result;
use bitflags::bitflags;

use crate::input::{Key, KeyboardState};
use crate::render::Frame;

/// Drawable area in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

bitflags! {
    /// Which kinds of focus the window currently holds.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Focus: u8 {
        const KEYBOARD = 1 << 0;
        const POINTER  = 1 << 1;
    }
}

/// Window-level events, separate from the sampled keyboard state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowEvent {
    /// The user asked to quit the application.
    Quit,
    /// The user closed this window only.
    Close,
}

/// A window (or window-like target) owned by one presentation instance.
pub trait Surface {
    /// Drains pending window events without blocking.
    fn poll_events(&mut self) -> Result<Vec<WindowEvent>>;

    fn focus(&self) -> Focus;

    /// Current state of the tracked keys.
    fn keyboard_state(&self) -> KeyboardState;

    fn viewport(&self) -> Viewport;

    fn present(&mut self, frame: &Frame) -> Result<()>;
}

/// In-memory surface driven programmatically. Records every presented frame.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    viewport: Viewport,
    focus: Focus,
    keys: KeyboardState,
    events: VecDeque<WindowEvent>,
    frames: Vec<Frame>,
}

impl HeadlessSurface {
    /// A focused surface of the given size.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            focus: Focus::all(),
            ..Self::default()
        }
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn press(&mut self, key: Key) {
        self.keys.set(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.keys.set(key, false);
    }

    pub fn push_event(&mut self, event: WindowEvent) {
        self.events.push_back(event);
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl Surface for HeadlessSurface {
    fn poll_events(&mut self) -> Result<Vec<WindowEvent>> {
        Ok(self.events.drain(..).collect())
    }

    fn focus(&self) -> Focus {
        self.focus
    }

    fn keyboard_state(&self) -> KeyboardState {
        self.keys
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn present(&mut self, frame: &Frame) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
