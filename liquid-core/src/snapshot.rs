//! Serializable snapshots
//!
//! Snapshots capture display contents and screen state in a form that can
//! be compared in tests and emitted by the headless runner. Given the same
//! sequence of operations, a screen produces identical snapshots.

use serde::{Deserialize, Serialize};

/// Contents of a `TextDisplay`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Display dimensions
    pub columns: usize,
    pub rows: usize,
    /// Row text, trailing blanks trimmed
    pub lines: Vec<String>,
    /// Cursor as (column, row)
    pub cursor: (usize, usize),
}

impl DisplaySnapshot {
    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Render as plain text, one row per line
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// State of a `Screen`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSnapshot {
    /// Number of registered lines
    pub line_count: usize,
    /// Focused line, None when no line has focus
    pub focus: Option<usize>,
    /// Configured visible-line limit (0 = all)
    pub max_line_display: usize,
    /// Whether the screen is hidden
    pub hidden: bool,
    /// First line of the visible window
    pub window_start: usize,
    /// One past the last line of the visible window
    pub window_end: usize,
}
