//! The line contract
//!
//! A line is one renderable, optionally focusable row of a menu screen. The
//! screen shares lines with whoever created them, so every method takes
//! `&self`; implementations keep their mutable state in `Cell`/`RefCell`.

use crate::display::DisplayTarget;
use crate::position::Position;

/// A menu row as seen by a [`Screen`](crate::Screen)
pub trait Line {
    /// Whether focus may land on this line
    fn is_focusable(&self) -> bool;

    /// Assign the on-display row this line is drawn at
    ///
    /// Called by the screen before `print` whenever only part of the screen
    /// fits on the display.
    fn set_row(&self, row: u8);

    /// Draw the line, with its focus indicator if `has_focus`
    fn print(&self, target: &mut dyn DisplayTarget, has_focus: bool);

    /// Change where the focus indicator is drawn
    fn set_focus_position(&self, position: Position);

    /// Run the function attached under `id`, returning false if there is none
    fn call_function(&self, id: u8) -> bool;
}
