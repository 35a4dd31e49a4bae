//! Text line widget
//!
//! A line of static text placed at fixed display coordinates, with up to
//! `MAX_FUNCTIONS` callbacks the user can trigger while it has focus.
//! Attaching a callback makes the line focusable.

use std::cell::{Cell, RefCell};
use std::fmt;

use crate::display::DisplayTarget;
use crate::error::{Error, Result};
use crate::line::Line;
use crate::position::Position;
use crate::MAX_FUNCTIONS;

/// Callback attached to a line
type Function = Box<dyn Fn()>;

/// A menu line showing a piece of text
pub struct TextLine {
    /// Column the text starts at
    column: u8,
    /// Row the line is drawn on (rewritten by scrolling screens)
    row: Cell<u8>,
    /// Text content
    text: RefCell<String>,
    /// Whether focus may land on this line
    focusable: Cell<bool>,
    /// Where the focus indicator is drawn
    focus_position: Cell<Position>,
    /// Indicator coordinates for `Position::Custom`, as (column, row)
    custom_focus: Cell<(u8, u8)>,
    /// Attached functions by id
    functions: Vec<(u8, Function)>,
}

impl TextLine {
    /// Create a non-focusable line of text at the given position
    pub fn new(column: u8, row: u8, text: impl Into<String>) -> Self {
        Self {
            column,
            row: Cell::new(row),
            text: RefCell::new(text.into()),
            focusable: Cell::new(false),
            focus_position: Cell::new(Position::default()),
            custom_focus: Cell::new((0, 0)),
            functions: Vec::new(),
        }
    }

    /// Get the starting column
    pub fn column(&self) -> u8 {
        self.column
    }

    /// Get the current row
    pub fn row(&self) -> u8 {
        self.row.get()
    }

    /// Get the text content
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    /// Replace the text content
    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.borrow_mut() = text.into();
    }

    /// Override whether focus may land on this line
    pub fn set_focusable(&self, focusable: bool) {
        self.focusable.set(focusable);
    }

    /// Get the focus indicator position
    pub fn focus_position(&self) -> Position {
        self.focus_position.get()
    }

    /// Draw the focus indicator at fixed coordinates
    pub fn set_custom_focus(&self, column: u8, row: u8) {
        self.custom_focus.set((column, row));
        self.focus_position.set(Position::Custom);
    }

    /// Attach a function under `id`, replacing any previous one
    ///
    /// The line becomes focusable.
    pub fn attach_function(&mut self, id: u8, function: impl Fn() + 'static) -> Result<()> {
        if let Some(slot) = self.functions.iter_mut().find(|(existing, _)| *existing == id) {
            slot.1 = Box::new(function);
        } else if self.functions.len() < MAX_FUNCTIONS {
            self.functions.push((id, Box::new(function)));
        } else {
            log::warn!(
                "Attaching function {} failed, a line holds at most {} functions",
                id,
                MAX_FUNCTIONS
            );
            return Err(Error::FunctionCapacityExceeded {
                capacity: MAX_FUNCTIONS,
            });
        }

        self.focusable.set(true);
        Ok(())
    }

    /// Get the number of attached functions
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}

impl Line for TextLine {
    fn is_focusable(&self) -> bool {
        self.focusable.get()
    }

    fn set_row(&self, row: u8) {
        self.row.set(row);
    }

    fn print(&self, target: &mut dyn DisplayTarget, has_focus: bool) {
        let row = self.row.get();
        let position = self.focus_position.get();

        if has_focus && position == Position::Left {
            target.set_cursor(self.column.saturating_sub(1), row);
            target.write_str(&position.symbol().to_string());
        }

        target.set_cursor(self.column, row);
        target.write_str(&self.text.borrow());

        if !has_focus {
            return;
        }
        match position {
            Position::Right => target.write_str(&position.symbol().to_string()),
            Position::Custom => {
                let (column, row) = self.custom_focus.get();
                target.set_cursor(column, row);
                target.write_str(&position.symbol().to_string());
            }
            Position::Left => {}
        }
    }

    fn set_focus_position(&self, position: Position) {
        self.focus_position.set(position);
    }

    fn call_function(&self, id: u8) -> bool {
        match self.functions.iter().find(|(existing, _)| *existing == id) {
            Some((_, function)) => {
                function();
                true
            }
            None => {
                log::debug!("No function {} attached to line", id);
                false
            }
        }
    }
}

impl fmt::Debug for TextLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextLine")
            .field("column", &self.column)
            .field("row", &self.row.get())
            .field("text", &self.text.borrow())
            .field("focusable", &self.focusable.get())
            .field("focus_position", &self.focus_position.get())
            .field("functions", &self.functions.len())
            .finish()
    }
}
