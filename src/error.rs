//! Error types for the company simulation core
//!
//! Every game-rule violation is an expected condition during play, so actions
//! report it as an `Err` and leave the company untouched.

use thiserror::Error;

/// Main error type for the company simulation core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("Insufficient funds: need ${needed}, have ${available}")]
    InsufficientFunds { needed: i64, available: i64 },

    #[error("Invalid assignment: {0}")]
    InvalidAssignment(String),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Choice not found: {0}")]
    ChoiceNotFound(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Serialization(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<GameError> for pyo3::PyErr {
    fn from(err: GameError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};

        match err {
            GameError::EmployeeNotFound(_)
            | GameError::ProjectNotFound(_)
            | GameError::EventNotFound(_)
            | GameError::ChoiceNotFound(_) => PyKeyError::new_err(err.to_string()),
            GameError::OutOfRange(_) | GameError::Serialization(_) => {
                PyValueError::new_err(err.to_string())
            }
            GameError::InsufficientFunds { .. }
            | GameError::InvalidAssignment(_)
            | GameError::InvalidState(_) => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

/// Result type alias for the company simulation core
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_funds_message() {
        let err = GameError::InsufficientFunds {
            needed: 8000,
            available: 100,
        };
        assert_eq!(err.to_string(), "Insufficient funds: need $8000, have $100");
    }

    #[test]
    fn test_json_error_converts() {
        let err: GameError = serde_json::from_str::<i32>("nope").unwrap_err().into();
        assert!(matches!(err, GameError::Serialization(_)));
    }
}
