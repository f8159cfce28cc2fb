//! Input messages sent from presentation instances to the simulation.

use std::fmt;

use crate::state::CardinalDirection;

/// Identity of one presentation instance (one window and its channel pair).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PresentationId(pub u32);

impl fmt::Display for PresentationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Input {
    Up,
    Down,
    Left,
    Right,
    /// Ends the whole simulation.
    QuitGame,
    /// Deregisters the presentation instance that owns the window.
    CloseWindow(PresentationId),
    #[default]
    None,
}

impl Input {
    /// Movement direction for directional inputs.
    pub fn direction(self) -> Option<CardinalDirection> {
        match self {
            Input::Up => Some(CardinalDirection::North),
            Input::Down => Some(CardinalDirection::South),
            Input::Left => Some(CardinalDirection::West),
            Input::Right => Some(CardinalDirection::East),
            Input::QuitGame | Input::CloseWindow(_) | Input::None => None,
        }
    }
}
