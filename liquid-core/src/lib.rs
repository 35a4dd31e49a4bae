//! Liquid Core - menu screens for character displays
//!
//! This crate provides the model behind one screen of a character-display
//! menu:
//! - `Line`: the contract a renderable menu row fulfils
//! - `Screen`: a bounded set of lines, a focus cursor and the scrolling
//!   window that decides which lines fit on the display
//! - `TextLine` and `TextDisplay`: a concrete line widget and an in-memory
//!   display, used by the headless runner and the tests
//!
//! The screen never owns its lines. Callers keep them alive for at least as
//! long as the screen, which the borrow checker enforces.

mod display;
mod error;
mod line;
mod position;
mod screen;
mod snapshot;
mod text_line;

pub use display::{DisplayTarget, TextDisplay};
pub use error::{Error, Result};
pub use line::Line;
pub use position::Position;
pub use screen::Screen;
pub use snapshot::{DisplaySnapshot, ScreenSnapshot};
pub use text_line::TextLine;

/// Maximum number of lines a single screen can hold
pub const MAX_LINES: usize = 12;

/// Maximum number of functions attachable to a single line
pub const MAX_FUNCTIONS: usize = 8;

