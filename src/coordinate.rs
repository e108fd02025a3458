//! Board coordinates and the `B7`-style label format.
//!
//! A label is one row letter `A`-`J` followed by a 1-based column number.
//! Translation only checks the shape of the label: a well-formed column that
//! falls outside `1..=10` still translates, to a coordinate off the grid, and
//! it is up to [`Grid::fits_grid`](crate::Grid::fits_grid) to reject it.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::common::GameError;
use crate::config::{row_index, GRID_SIZE, ROW_LABELS};

/// Zero-based `(row, column)` pair. May lie off the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether both components lie in `[0, GRID_SIZE)`.
    pub fn is_on_grid(&self) -> bool {
        self.index().is_some()
    }

    /// Unsigned `(row, col)` for on-grid coordinates.
    pub fn index(&self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        (row < GRID_SIZE && col < GRID_SIZE).then_some((row, col))
    }

    /// Inverse of [`translate`]; `None` off the grid.
    pub fn label(&self) -> Option<String> {
        let (row, col) = self.index()?;
        let mut s = String::new();
        s.push(ROW_LABELS[row]);
        s.push_str(&(col + 1).to_string());
        Some(s)
    }

    /// The cell `steps` further along the row (`along_row`) or the column.
    pub(crate) fn offset(&self, steps: i32, along_row: bool) -> Option<Self> {
        if along_row {
            Some(Self::new(self.row, self.col.checked_add(steps)?))
        } else {
            Some(Self::new(self.row.checked_add(steps)?, self.col))
        }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row as i32, col as i32)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(&label),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

impl FromStr for Coordinate {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        translate(s)
    }
}

/// Translate a label such as `"B7"` into `(1, 6)`.
///
/// The row letter may be lower case. Column numbers are not range-checked.
pub fn translate(label: &str) -> Result<Coordinate, GameError> {
    let invalid = || GameError::InvalidCoordinate(label.to_string());

    let mut chars = label.chars();
    let letter = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
    let row = row_index(letter).ok_or_else(invalid)?;
    let number: i32 = chars.as_str().parse().map_err(|_| invalid())?;
    let col = number.checked_sub(1).ok_or_else(invalid)?;
    Ok(Coordinate::new(row as i32, col))
}
