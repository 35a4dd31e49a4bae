//! Screen definitions
//!
//! A screen definition is a TOML file describing the lines of one screen:
//!
//! ```toml
//! max_line_display = 2
//! focus_position = "left"
//!
//! [[lines]]
//! column = 1
//! row = 0
//! text = "Backlight"
//! functions = [1, 2]
//! ```
//!
//! Functions named in a definition record their invocations in a shared
//! call log so the runner can report them.

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use liquid_core::{Position, Screen, TextLine};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;

/// A recorded function invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Index of the line in the definition
    pub line: usize,
    /// Function id
    pub function: u8,
}

/// Shared log of function invocations
pub type CallLog = Rc<RefCell<Vec<FunctionCall>>>;

/// One line of a screen definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDefinition {
    /// Column the text starts at
    #[serde(default)]
    pub column: u8,
    /// Row the line is drawn on
    #[serde(default)]
    pub row: u8,
    /// Text content
    pub text: String,
    /// Function ids to attach
    #[serde(default)]
    pub functions: Vec<u8>,
    /// Explicit focusable flag, otherwise focusable iff it has functions
    #[serde(default)]
    pub focusable: Option<bool>,
    /// Custom focus indicator coordinates as [column, row]
    #[serde(default)]
    pub focus_at: Option<[u8; 2]>,
}

/// A screen definition
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScreenDefinition {
    /// Lines drawn at once, defaults to the display rows
    #[serde(default)]
    pub max_line_display: Option<usize>,
    /// Focus indicator position for every line
    #[serde(default)]
    pub focus_position: Option<Position>,
    /// Lines in display order
    #[serde(default)]
    pub lines: Vec<LineDefinition>,
}

impl ScreenDefinition {
    /// Load a definition from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a definition from TOML
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Create the lines, wiring every function to the call log
    pub fn build_lines(&self, calls: &CallLog) -> Result<Vec<TextLine>> {
        let mut lines = Vec::with_capacity(self.lines.len());
        for (index, def) in self.lines.iter().enumerate() {
            let mut line = TextLine::new(def.column, def.row, def.text.as_str());
            for &function in &def.functions {
                let calls = Rc::clone(calls);
                line.attach_function(function, move || {
                    log::debug!("Line {} function {} called", index, function);
                    calls.borrow_mut().push(FunctionCall {
                        line: index,
                        function,
                    });
                })?;
            }
            if let Some(focusable) = def.focusable {
                line.set_focusable(focusable);
            }
            lines.push(line);
        }
        Ok(lines)
    }

    /// Create a screen over previously built lines
    ///
    /// Per-line custom focus coordinates are applied after the screen-wide
    /// position so they take precedence.
    pub fn build_screen<'a>(&self, lines: &'a [TextLine], config: &Config) -> Result<Screen<'a>> {
        let mut screen = Screen::new();
        for line in lines {
            screen.add_line(line)?;
        }

        screen.set_max_line_display(self.max_line_display.unwrap_or(config.rows as usize));
        screen.set_focus_position(self.focus_position.unwrap_or(config.focus_position))?;

        for (line, def) in lines.iter().zip(&self.lines) {
            if let Some([column, row]) = def.focus_at {
                line.set_custom_focus(column, row);
            }
        }

        Ok(screen)
    }
}
