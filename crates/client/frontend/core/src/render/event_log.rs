use game_core::EventLog;

use super::frame::{Color, DrawCommand, Frame, Rect};
use crate::surface::Viewport;

/// Layout of the translucent event log panel in the lower-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventPanel {
    pub background: Rect,
    pub text_x: i32,
    pub line_height: u32,
}

impl EventPanel {
    pub const BACKGROUND: Color = Color::rgba(0, 0, 0, 128);
    pub const TEXT: Color = Color::rgb(255, 0, 0);
    const TEXT_MARGIN: i32 = 5;

    /// Panel starts at 68% of the viewport height and spans 25% of its width.
    pub fn layout(viewport: Viewport, line_height: u32) -> Self {
        let top = (viewport.height as u64 * 68 / 100) as i32;
        let width = (viewport.width as u64 * 25 / 100) as u32;
        Self {
            background: Rect::new(0, top, width, viewport.height - top as u32),
            text_x: Self::TEXT_MARGIN,
            line_height: line_height.max(1),
        }
    }

    /// Draws the background and one line per non-empty event, oldest first.
    pub fn draw(&self, events: &EventLog, frame: &mut Frame) {
        frame.push(DrawCommand::Fill {
            rect: self.background,
            color: Self::BACKGROUND,
        });

        for (row, event) in events.iter().enumerate() {
            frame.push(DrawCommand::Text {
                text: event.to_string(),
                x: self.text_x,
                y: self.background.y + row as i32 * self.line_height as i32,
                color: Self::TEXT,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_window_fractions() {
        let panel = EventPanel::layout(Viewport::new(1280, 720), 32);
        assert_eq!(panel.background, Rect::new(0, 489, 320, 231));
        assert_eq!(panel.text_x, 5);
    }

    #[test]
    fn lines_stack_without_gaps() {
        let mut events = EventLog::new(5);
        events.push("first");
        events.push("second");

        let panel = EventPanel::layout(Viewport::new(100, 100), 10);
        let mut frame = Frame::new(Viewport::new(100, 100));
        panel.draw(&events, &mut frame);

        assert!(matches!(frame.commands[0], DrawCommand::Fill { .. }));
        let lines: Vec<_> = frame
            .commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, y, .. } => Some((text.as_str(), *y)),
                _ => None,
            })
            .collect();
        assert_eq!(lines, [("first", 68), ("second", 78)]);
    }

    #[test]
    fn wrapped_log_draws_oldest_first() {
        let mut events = EventLog::new(3);
        for event in ["a", "b", "c", "d"] {
            events.push(event);
        }
        let mut frame = Frame::new(Viewport::new(100, 100));
        EventPanel::layout(Viewport::new(100, 100), 10).draw(&events, &mut frame);

        assert_eq!(frame.texts().collect::<Vec<_>>(), ["b", "c", "d"]);
    }
}
