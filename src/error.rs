//! Error types
//!
//! Engine construction and checked move input report `EngineError`;
//! start-screen parsing reports `ConfigError`.

use thiserror::Error;

use crate::board::{Mark, Pos, MAX_BOARD_SIZE};
use crate::eval::MAX_RUN;

/// Errors raised by the engine's checked entry points
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Board side of zero or above the supported maximum
    #[error("Invalid board size: {size} (must be 1-{max})", max = MAX_BOARD_SIZE)]
    InvalidSize { size: usize },

    /// Required run of zero or too long to score
    #[error("Invalid run length: {run} (must be 1-{max})", max = MAX_RUN)]
    InvalidRun { run: usize },

    /// Engine or opponent assigned the empty mark, or both the same mark
    #[error("Invalid marks: engine {engine}, opponent {opponent}")]
    InvalidMarks { engine: Mark, opponent: Mark },

    /// Move outside the board
    #[error("Position {pos} is outside the {size}x{size} board")]
    OutOfBounds { pos: Pos, size: usize },

    /// Move on a taken cell
    #[error("Cell {pos} is already occupied")]
    Occupied { pos: Pos },

    /// Attempt to place the empty mark
    #[error("Cannot place an empty mark")]
    EmptyMark,
}

/// Errors from parsing game settings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board size is required")]
    MissingSize,

    #[error("Board size must be a number, got {input:?}")]
    NotANumber { input: String },

    #[error("Board size must be between 1 and {max}, got {size}", max = MAX_BOARD_SIZE)]
    SizeOutOfRange { size: usize },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Result type alias for configuration parsing
pub type ConfigResult<T> = Result<T, ConfigError>;
