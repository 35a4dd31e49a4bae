//! Display targets
//!
//! A display target is whatever lines draw onto. The screen only passes it
//! through to its lines. `TextDisplay` is an in-memory character display
//! with the same addressing as an HD44780-style LCD: a cursor positioned by
//! column and row, and writes that advance it.

use crate::snapshot::DisplaySnapshot;

/// A character display lines can draw onto
pub trait DisplayTarget {
    /// Move the write cursor (0-indexed)
    fn set_cursor(&mut self, column: u8, row: u8);

    /// Write text at the cursor, advancing it
    fn write_str(&mut self, s: &str);

    /// Blank the display and home the cursor
    fn clear(&mut self);
}

/// In-memory character display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDisplay {
    /// Rows of characters (row 0 is top)
    cells: Vec<Vec<char>>,
    /// Number of columns
    columns: usize,
    /// Number of rows
    rows: usize,
    /// Cursor column
    cursor_column: usize,
    /// Cursor row
    cursor_row: usize,
}

impl TextDisplay {
    /// Create a blank display with the given dimensions
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            cells: vec![vec![' '; columns]; rows],
            columns,
            rows,
            cursor_column: 0,
            cursor_row: 0,
        }
    }

    /// Get number of columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the cursor position as (column, row)
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_column, self.cursor_row)
    }

    /// Get the character at a position, None if out of bounds
    pub fn char_at(&self, column: usize, row: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Get one row as a string with trailing blanks trimmed
    pub fn row_text(&self, row: usize) -> String {
        self.cells
            .get(row)
            .map(|r| r.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    /// Render all rows, one per line
    pub fn to_text(&self) -> String {
        (0..self.rows)
            .map(|row| self.row_text(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Capture the display contents
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            columns: self.columns,
            rows: self.rows,
            lines: (0..self.rows).map(|row| self.row_text(row)).collect(),
            cursor: (self.cursor_column, self.cursor_row),
        }
    }
}

impl DisplayTarget for TextDisplay {
    fn set_cursor(&mut self, column: u8, row: u8) {
        self.cursor_column = column as usize;
        self.cursor_row = row as usize;
    }

    fn write_str(&mut self, s: &str) {
        for c in s.chars() {
            // Writes past the edge are dropped, like on the real hardware
            if let Some(cell) = self
                .cells
                .get_mut(self.cursor_row)
                .and_then(|r| r.get_mut(self.cursor_column))
            {
                *cell = c;
            }
            self.cursor_column += 1;
        }
    }

    fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(' ');
        }
        self.cursor_column = 0;
        self.cursor_row = 0;
    }
}
