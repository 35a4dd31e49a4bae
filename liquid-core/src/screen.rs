//! Screen model implementation
//!
//! A screen is a bounded list of borrowed lines plus a focus cursor. When
//! the display has fewer rows than the screen has lines, only a window of
//! consecutive lines is drawn, and the window scrolls so the focused line is
//! always inside it.
//!
//! Focus is an index in `0..=line_count`. The value `line_count` is the
//! "no focus" position: navigation passes through it once per lap, which
//! also guarantees termination on screens without focusable lines.

use std::fmt;
use std::ops::Range;

use crate::display::DisplayTarget;
use crate::error::{Error, Result};
use crate::line::Line;
use crate::position::Position;
use crate::snapshot::ScreenSnapshot;
use crate::MAX_LINES;

/// One screen of a menu
pub struct Screen<'a> {
    /// Registered lines; only the first `line_count` slots are populated
    lines: [Option<&'a dyn Line>; MAX_LINES],
    /// Number of registered lines
    line_count: usize,
    /// Focused line index, `line_count` when nothing is focused
    focus: usize,
    /// Maximum number of lines drawn at once (0 = all)
    max_line_display: usize,
    /// Hidden screens are skipped by the caller when rendering
    hidden: bool,
}

impl<'a> Screen<'a> {
    /// Create an empty screen that shows all of its lines
    pub fn new() -> Self {
        Self {
            lines: [None; MAX_LINES],
            line_count: 0,
            focus: 0,
            max_line_display: 0,
            hidden: false,
        }
    }

    /// Create a screen from its initial lines
    ///
    /// The visible-line limit defaults to the number of lines supplied, so a
    /// screen built for a two-row display from two lines shows both. Lines
    /// beyond `MAX_LINES` are dropped.
    pub fn with_lines(lines: &[&'a dyn Line]) -> Self {
        let mut screen = Self::new();
        for &line in lines {
            if screen.add_line(line).is_err() {
                break;
            }
        }
        if !lines.is_empty() {
            screen.max_line_display = lines.len();
        }
        screen
    }

    /// Append a line
    ///
    /// Focus moves along with the count so a screen built up line by line
    /// keeps starting out unfocused. When the screen is full the visible
    /// limit is clamped to the current line count and the line is rejected.
    pub fn add_line(&mut self, line: &'a dyn Line) -> Result<()> {
        if self.line_count < MAX_LINES {
            self.lines[self.line_count] = Some(line);
            log::debug!("Added line {}", self.line_count);
            self.line_count += 1;
            self.focus += 1;
            return Ok(());
        }

        self.max_line_display = self.line_count;
        log::warn!(
            "Adding line {} failed, a screen holds at most {} lines",
            self.line_count,
            MAX_LINES
        );
        Err(Error::CapacityExceeded {
            capacity: MAX_LINES,
        })
    }

    /// Set the focus indicator position of every line
    ///
    /// `Position::Custom` needs per-line coordinates and is rejected.
    pub fn set_focus_position(&mut self, position: Position) -> Result<()> {
        if position == Position::Custom {
            log::warn!("Custom focus position can't be set for a whole screen");
            return Err(Error::InvalidFocusPosition);
        }

        log::debug!("Focus position set to {:?}", position);
        for line in self.lines() {
            line.set_focus_position(position);
        }
        Ok(())
    }

    /// Set the maximum number of lines drawn at once (0 = all)
    pub fn set_max_line_display(&mut self, lines: usize) {
        self.max_line_display = lines;
    }

    /// Get the maximum number of lines drawn at once (0 = all)
    pub fn max_line_display(&self) -> usize {
        self.max_line_display
    }

    /// Mark the screen hidden or visible
    pub fn hide(&mut self, hide: bool) {
        self.hidden = hide;
    }

    /// Check if the screen is hidden
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Get the number of registered lines
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Check if the screen has no lines
    pub fn is_empty(&self) -> bool {
        self.line_count == 0
    }

    /// Get the focused line index, None when no line has focus
    pub fn focus(&self) -> Option<usize> {
        (self.focus < self.line_count).then_some(self.focus)
    }

    /// Get the raw focus index, equal to `line_count` when nothing is focused
    pub fn focus_index(&self) -> usize {
        self.focus
    }

    /// Number of lines drawn at once
    fn visible_count(&self) -> usize {
        if self.max_line_display == 0 {
            self.line_count
        } else {
            self.max_line_display.min(self.line_count)
        }
    }

    /// Range of line indices drawn by `print`
    ///
    /// The window starts at 0 until focus moves past its last row, then
    /// scrolls so the focused line is the bottom row, stopping once the last
    /// line is on display.
    pub fn visible_window(&self) -> Range<usize> {
        let visible = self.visible_count();
        let offset = if self.focus >= visible {
            (self.focus - visible + 1).min(self.line_count - visible)
        } else {
            0
        };
        offset..offset + visible
    }

    /// Draw the visible window
    ///
    /// Lines are drawn top to bottom. When only part of the screen fits, each
    /// drawn line is first told which display row it occupies.
    pub fn print(&self, target: &mut dyn DisplayTarget) {
        let window = self.visible_window();
        let scrolled = window.len() < self.line_count;
        log::debug!(
            "Printing lines {}..{} of {}",
            window.start,
            window.end,
            self.line_count
        );

        let lines = self.lines[window.clone()].iter().flatten();
        for (row, (index, line)) in window.zip(lines).enumerate() {
            if scrolled {
                line.set_row(row as u8);
            }
            line.print(target, index == self.focus);
        }
    }

    /// Move focus to the next or previous focusable line
    ///
    /// Moving forward from the last line, or backward from the first, lands
    /// on the no-focus position; the next move wraps around. Non-focusable
    /// lines are skipped.
    pub fn switch_focus(&mut self, forward: bool) {
        if self.line_count == 0 {
            return;
        }

        loop {
            if forward {
                if self.focus < self.line_count {
                    self.focus += 1;
                    if self.focus == self.line_count {
                        break;
                    }
                } else {
                    self.focus = 0;
                }
            } else if self.focus == 0 {
                self.focus = self.line_count;
                break;
            } else {
                self.focus -= 1;
            }

            if self.lines[self.focus].is_some_and(|line| line.is_focusable()) {
                break;
            }
        }

        log::debug!("Focus switched to {}", self.focus);
    }

    /// Run function `id` of the focused line
    ///
    /// Returns false when no line has focus or the line has no such function.
    pub fn call_function(&self, id: u8) -> bool {
        self.focus()
            .and_then(|index| self.lines[index])
            .is_some_and(|line| line.call_function(id))
    }

    /// Capture the screen state
    pub fn snapshot(&self) -> ScreenSnapshot {
        let window = self.visible_window();
        ScreenSnapshot {
            line_count: self.line_count,
            focus: self.focus(),
            max_line_display: self.max_line_display,
            hidden: self.hidden,
            window_start: window.start,
            window_end: window.end,
        }
    }

    /// Iterate over the registered lines
    fn lines(&self) -> impl Iterator<Item = &'a dyn Line> + '_ {
        self.lines[..self.line_count].iter().flatten().copied()
    }
}

impl Default for Screen<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screen")
            .field("line_count", &self.line_count)
            .field("focus", &self.focus)
            .field("max_line_display", &self.max_line_display)
            .field("hidden", &self.hidden)
            .finish()
    }
}
