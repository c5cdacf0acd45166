//! Source location tracking.
//!
//! `Position` is the 1-based row/column pair every diagnostic reports.
//! Tokens store 0-based coordinates; they convert on the way out.

use std::fmt;

/// A 1-based location in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// 1-based line number.
    pub row: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl Position {
    /// Creates a new position from 1-based coordinates.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Creates a position from 0-based coordinates.
    #[must_use]
    pub const fn from_zero_based(row: usize, column: usize) -> Self {
        Self {
            row: row + 1,
            column: column + 1,
        }
    }

    /// The position of the first character of the input.
    #[must_use]
    pub const fn at_start() -> Self {
        Self { row: 1, column: 1 }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::at_start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}
