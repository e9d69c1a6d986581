use std::path::PathBuf;

use crate::domain::coordinate::Coordinate;

/// Errors produced while parsing a coordinate string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    #[error("non-integer value {component:?} between the '.' separators")]
    NonNumericInput { component: String },

    #[error("expected {expected} indexes, one per dimension, but found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Outcome of a rejected placement. A rejected placement never changes the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("non-integer value {component:?} between the '.' separators")]
    NonNumericInput { component: String },

    #[error("expected {expected} indexes, one per dimension, but found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("the space at {0} is already claimed")]
    AlreadyOccupied(Coordinate),

    #[error("coordinate {0} does not address a space on this board")]
    ImpossibleCoordinate(Coordinate),

    #[error("the game is already over")]
    GameOver,
}

impl From<CoordinateError> for PlacementError {
    fn from(err: CoordinateError) -> Self {
        match err {
            CoordinateError::NonNumericInput { component } => {
                PlacementError::NonNumericInput { component }
            }
            CoordinateError::DimensionMismatch { expected, found } => {
                PlacementError::DimensionMismatch { expected, found }
            }
        }
    }
}

impl PlacementError {
    /// Whether asking the same player again can lead to a successful placement.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, PlacementError::GameOver)
    }
}

/// Errors raised while building or preparing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("tic-tac-toe needs at least 2 dimensions, got {0}")]
    DimensionTooSmall(usize),

    #[error("a board with {0} dimensions has too many spaces to allocate")]
    DimensionTooLarge(usize),

    #[error("a board with an odd dimension count ({0}) has no single center space")]
    NoCenter(usize),

    #[error("the center can only be locked before the first move")]
    AlreadyStarted,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors from the interactive setup prompts.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no valid answer for {question} after {attempts} attempts")]
    AttemptsExhausted {
        question: &'static str,
        attempts: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_error_converts_to_placement_error() {
        let err: PlacementError = CoordinateError::DimensionMismatch {
            expected: 3,
            found: 2,
        }
        .into();
        assert_eq!(
            err,
            PlacementError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_placement_error_display() {
        let err = PlacementError::AlreadyOccupied(Coordinate::new(vec![1, 0, 2]));
        assert_eq!(err.to_string(), "the space at 1.0.2 is already claimed");
    }

    #[test]
    fn test_only_game_over_is_unrecoverable() {
        assert!(!PlacementError::GameOver.is_recoverable());
        assert!(PlacementError::NonNumericInput {
            component: "a".into()
        }
        .is_recoverable());
        assert!(PlacementError::ImpossibleCoordinate(Coordinate::new(vec![9, 9])).is_recoverable());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("input.max_attempts must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: input.max_attempts must be > 0"
        );
    }
}
