//! Navigation scripts
//!
//! A script is a whitespace-separated list of commands standing in for the
//! buttons of a real device: `next`, `prev`, `call:<id>`, `hide`, `show` and
//! `print`. Text after `#` on a line is ignored.

use crate::error::{Error, Result};

/// One script command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move focus forward
    Next,
    /// Move focus backward
    Prev,
    /// Call a function of the focused line
    Call(u8),
    /// Hide the screen
    Hide,
    /// Show the screen
    Show,
    /// Render a frame
    Print,
}

impl Command {
    /// Parse a single command word
    pub fn parse(word: &str) -> Result<Self> {
        if let Some(id) = word.strip_prefix("call:") {
            return id
                .parse()
                .map(Command::Call)
                .map_err(|_| Error::InvalidFunctionId(id.to_string()));
        }

        match word.to_lowercase().as_str() {
            "next" | "n" => Ok(Command::Next),
            "prev" | "p" => Ok(Command::Prev),
            "hide" => Ok(Command::Hide),
            "show" => Ok(Command::Show),
            "print" => Ok(Command::Print),
            _ => Err(Error::UnknownCommand(word.to_string())),
        }
    }
}

/// Parse a script into commands
pub fn parse(script: &str) -> Result<Vec<Command>> {
    script
        .lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(str::split_whitespace)
        .map(Command::parse)
        .collect()
}
