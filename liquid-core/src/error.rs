//! Error types for screen and line configuration

use thiserror::Error;

/// Screen and line error type
///
/// Every variant is recoverable: the operation is rejected and the state
/// it would have changed is left as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The screen already holds `MAX_LINES` lines
    #[error("Screen is full: at most {capacity} lines can be added")]
    CapacityExceeded { capacity: usize },

    /// The line already holds `MAX_FUNCTIONS` functions
    #[error("Line is full: at most {capacity} functions can be attached")]
    FunctionCapacityExceeded { capacity: usize },

    /// `Position::Custom` was requested for a whole screen
    #[error("Custom focus position can only be set per line")]
    InvalidFocusPosition,
}

/// Result type for screen and line operations
pub type Result<T> = std::result::Result<T, Error>;
