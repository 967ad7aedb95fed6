//! Error types for tupper_engine

use thiserror::Error;

/// Main error type for grid conversion and editing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Decimal, binary or text grid input that cannot be accepted.
    /// Never fatal: the caller keeps its previous state and shows the message.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Cell coordinate outside of the grid. Signals a caller bug.
    #[error("Cell ({x}, {y}) out of bounds (grid is 106x17)")]
    OutOfBounds { x: i32, y: i32 },
}

/// Result type alias for tupper_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Create an invalid input error from any displayable message
    pub fn invalid_input(msg: impl std::fmt::Display) -> Self {
        Self::InvalidInput { message: msg.to_string() }
    }

    pub fn out_of_bounds(x: i32, y: i32) -> Self {
        Self::OutOfBounds { x, y }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
