//! Focus indicator placement

use serde::{Deserialize, Serialize};

/// Where a line draws its focus indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Right after the line's text
    #[default]
    Right,
    /// One column left of the line's text
    Left,
    /// At explicit per-line coordinates
    Custom,
}

impl Position {
    /// Parse a position name
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "right" => Some(Position::Right),
            "left" => Some(Position::Left),
            "custom" => Some(Position::Custom),
            _ => None,
        }
    }

    /// Character drawn when a line in this position has focus
    pub fn symbol(self) -> char {
        match self {
            Position::Right | Position::Custom => '<',
            Position::Left => '>',
        }
    }
}
