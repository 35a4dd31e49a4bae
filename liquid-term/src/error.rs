//! Error types for the headless runner

use std::io;
use thiserror::Error;

/// Runner error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Screen definition could not be parsed
    #[error("Failed to parse screen definition: {0}")]
    Definition(#[from] toml::de::Error),

    /// Screen or line rejected part of the definition
    #[error("Invalid screen: {0}")]
    Screen(#[from] liquid_core::Error),

    /// Unknown script command
    #[error("Unknown script command '{0}'")]
    UnknownCommand(String),

    /// Function id in a `call:` command is not a number in 0..=255
    #[error("Invalid function id '{0}'")]
    InvalidFunctionId(String),

    /// Frames could not be encoded as JSON
    #[error("Failed to encode frames: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for runner operations
pub type Result<T> = std::result::Result<T, Error>;
