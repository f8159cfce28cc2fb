//! [`Surface`] implementation backed by the terminal.
//!
//! Terminals report key presses (and auto-repeats) but rarely releases, so
//! presses are turned into a one-frame pulse. A press that arrives while the
//! same key is still reported down is held back one frame so the presentation
//! sees a release in between.

use std::time::Duration;

use anyhow::Result;
use client_frontend_core::{Focus, Frame, Key, KeyboardState, Surface, Viewport, WindowEvent};
use crossterm::event::{
    self as term_event, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use strum::IntoEnumIterator;
use tracing::debug;

use super::frame_view::FrameView;
use super::terminal::Tui;
use super::theme::Theme;

/// What a single key event means to the presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Hold(Key),
    Window(WindowEvent),
    Ignore,
}

pub fn translate_key(key: &KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Window(WindowEvent::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => KeyAction::Hold(Key::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => KeyAction::Hold(Key::Down),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => KeyAction::Hold(Key::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => KeyAction::Hold(Key::Right),
        KeyCode::Char('q') => KeyAction::Window(WindowEvent::Quit),
        KeyCode::Esc => KeyAction::Window(WindowEvent::Close),
        _ => KeyAction::Ignore,
    }
}

/// Turns terminal press events into keyboard samples with distinct edges.
#[derive(Clone, Copy, Debug, Default)]
pub struct PressLatch {
    reported: KeyboardState,
    pending: KeyboardState,
}

impl PressLatch {
    /// Combines this poll's presses with presses held back last poll and
    /// returns the sample to report.
    pub fn sample(&mut self, pressed: KeyboardState) -> KeyboardState {
        let mut sample = KeyboardState::default();
        for key in Key::iter() {
            let down = pressed.is_pressed(key) || self.pending.is_pressed(key);
            let defer = down && self.reported.is_pressed(key);
            sample.set(key, down && !defer);
            self.pending.set(key, defer);
        }
        self.reported = sample;
        sample
    }
}

pub struct TerminalSurface {
    terminal: Tui,
    tile_size: u32,
    theme: Theme,
    focus: Focus,
    latch: PressLatch,
    keys: KeyboardState,
}

impl TerminalSurface {
    pub fn new(terminal: Tui, tile_size: u32) -> Self {
        Self {
            terminal,
            tile_size: tile_size.max(1),
            theme: Theme,
            focus: Focus::all(),
            latch: PressLatch::default(),
            keys: KeyboardState::default(),
        }
    }
}

impl Surface for TerminalSurface {
    fn poll_events(&mut self) -> Result<Vec<WindowEvent>> {
        let mut pressed = KeyboardState::default();
        let mut events = Vec::new();

        while term_event::poll(Duration::ZERO)? {
            match term_event::read()? {
                TermEvent::Key(key) => match translate_key(&key) {
                    KeyAction::Hold(held) => pressed.set(held, true),
                    KeyAction::Window(event) => events.push(event),
                    KeyAction::Ignore => {}
                },
                TermEvent::FocusGained => {
                    debug!("terminal focus gained");
                    self.focus = Focus::all();
                }
                TermEvent::FocusLost => {
                    debug!("terminal focus lost");
                    self.focus = Focus::empty();
                }
                _ => {}
            }
        }

        self.keys = self.latch.sample(pressed);
        Ok(events)
    }

    fn focus(&self) -> Focus {
        self.focus
    }

    fn keyboard_state(&self) -> KeyboardState {
        self.keys
    }

    fn viewport(&self) -> Viewport {
        let (cols, rows) = self
            .terminal
            .size()
            .map(|size| (size.width, size.height))
            .unwrap_or((80, 24));
        Viewport::new(cols as u32 * self.tile_size, rows as u32 * self.tile_size)
    }

    fn present(&mut self, frame: &Frame) -> Result<()> {
        let (tile_size, theme) = (self.tile_size, self.theme);
        self.terminal.draw(|f| {
            let area = f.area();
            f.render_widget(FrameView::new(frame, tile_size, theme), area);
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn presses_in_consecutive_polls_are_separate_edges() {
        let mut latch = PressLatch::default();
        let right = KeyboardState::with_pressed(&[Key::Right]);
        let none = KeyboardState::default();

        let mut previous = KeyboardState::default();
        let mut edges = Vec::new();
        for pressed in [right, right, none, none] {
            let current = latch.sample(pressed);
            edges.push(current.pressed_since(&previous, Key::Right));
            previous = current;
        }

        assert_eq!(edges, [true, false, true, false]);
    }

    #[test]
    fn a_single_press_is_a_one_frame_pulse() {
        let mut latch = PressLatch::default();
        let up = KeyboardState::with_pressed(&[Key::Up]);

        assert!(latch.sample(up).is_pressed(Key::Up));
        assert!(!latch.sample(KeyboardState::default()).is_pressed(Key::Up));
        assert!(!latch.sample(KeyboardState::default()).is_pressed(Key::Up));
    }

    #[test]
    fn arrows_and_letters_hold_keys() {
        assert_eq!(translate_key(&press(KeyCode::Up)), KeyAction::Hold(Key::Up));
        assert_eq!(translate_key(&press(KeyCode::Char('j'))), KeyAction::Hold(Key::Down));
        assert_eq!(translate_key(&press(KeyCode::Char('a'))), KeyAction::Hold(Key::Left));
        assert_eq!(translate_key(&press(KeyCode::Char('l'))), KeyAction::Hold(Key::Right));
    }

    #[test]
    fn quit_and_close_are_window_events() {
        assert_eq!(
            translate_key(&press(KeyCode::Char('q'))),
            KeyAction::Window(WindowEvent::Quit)
        );
        assert_eq!(
            translate_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Window(WindowEvent::Quit)
        );
        assert_eq!(
            translate_key(&press(KeyCode::Esc)),
            KeyAction::Window(WindowEvent::Close)
        );
    }

    #[test]
    fn releases_and_unknown_keys_are_ignored() {
        let mut release = press(KeyCode::Up);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate_key(&release), KeyAction::Ignore);
        assert_eq!(translate_key(&press(KeyCode::Char('z'))), KeyAction::Ignore);
    }
}
