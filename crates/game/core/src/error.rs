//! Errors raised while building a [`Level`](crate::Level).
//!
//! These are startup errors: a level that fails to build is a data problem,
//! not a runtime fault, and nothing retries them. They are returned to the
//! caller that asked for the level so the host decides whether to abort.

use crate::state::Position;

/// Severity level of an error, used for logging and recovery decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Invalid input data; the level cannot be constructed.
    Fatal,
    /// Invalid use of the API on an otherwise valid level.
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
            Self::Validation => "validation",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("level text is empty")]
    EmptyLevel,

    #[error("invalid map character {character:?} at line {line}, column {column}")]
    InvalidMapCharacter {
        character: char,
        line: usize,
        column: usize,
    },

    #[error("no floor tile next to placeholder at {position}")]
    UnresolvedPendingTile { position: Position },

    #[error("level has no player start")]
    MissingPlayerStart,

    #[error("position {position} is outside the level")]
    OutOfBounds { position: Position },

    #[error("cell {position} is already occupied")]
    CellOccupied { position: Position },
}

impl LevelError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyLevel
            | Self::InvalidMapCharacter { .. }
            | Self::UnresolvedPendingTile { .. }
            | Self::MissingPlayerStart => ErrorSeverity::Fatal,
            Self::OutOfBounds { .. } | Self::CellOccupied { .. } => ErrorSeverity::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_are_fatal_and_api_misuse_is_validation() {
        assert_eq!(LevelError::MissingPlayerStart.severity(), ErrorSeverity::Fatal);
        assert_eq!(
            LevelError::UnresolvedPendingTile {
                position: Position::new(0, 0)
            }
            .severity()
            .as_str(),
            "fatal"
        );
        assert_eq!(
            LevelError::CellOccupied {
                position: Position::new(1, 1)
            }
            .severity()
            .as_str(),
            "validation"
        );
    }
}
