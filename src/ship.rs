//! Ships: a hull laid out from an anchor cell along one axis.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::common::GameError;
use crate::config::GRID_SIZE;
use crate::coordinate::{translate, Coordinate};
use crate::grid::Cells;

/// Axis a ship extends along from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "UPPERCASE"))]
pub enum Orientation {
    /// Increasing column.
    Row,
    /// Increasing row.
    Column,
}

impl FromStr for Orientation {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ROW" | "R" => Ok(Orientation::Row),
            "COLUMN" | "C" => Ok(Orientation::Column),
            _ => Err(GameError::UnknownOrientation(s.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Row => "ROW",
            Orientation::Column => "COLUMN",
        })
    }
}

/// A ship and the cells of its hull that have not been hit yet.
///
/// Construction does no validation beyond parsing the anchor; length and
/// bounds are checked by [`Player::try_place_ship`](crate::Player::try_place_ship).
/// The occupied set only tracks on-grid cells, so it is exact for any ship
/// that could actually be placed.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    anchor: String,
    origin: Coordinate,
    orientation: Orientation,
    afloat: Cells,
}

impl Ship {
    /// Lay out a ship of `length` cells starting at the `anchor` label.
    pub fn new(length: usize, anchor: &str, orientation: Orientation) -> Result<Self, GameError> {
        let origin = translate(anchor)?;
        let mut afloat = Cells::new();
        for cell in Footprint::new(origin, orientation, length) {
            match cell.index() {
                Some((r, c)) => afloat.set(r, c)?,
                None if past_far_edge(cell, orientation) => break,
                None => {}
            }
        }
        Ok(Ship {
            length,
            anchor: anchor.to_string(),
            origin,
            orientation,
            afloat,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Label the ship was anchored at, as given.
    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    /// Translated anchor.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Every cell of the hull as laid out, hit or not, on the grid or not.
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.origin, self.orientation, self.length)
    }

    /// Cells still intact.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.afloat.iter_set_bits().map(Coordinate::from)
    }

    /// Intact cells as a cell set.
    pub fn occupancy(&self) -> Cells {
        self.afloat
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord
            .index()
            .is_some_and(|(r, c)| self.afloat.contains(r, c))
    }

    /// Remove `coord` from the intact cells. Returns whether it was there;
    /// hitting the same cell twice is a no-op.
    pub fn register_hit(&mut self, coord: Coordinate) -> bool {
        match coord.index() {
            Some((r, c)) if self.afloat.contains(r, c) => {
                self.afloat.remove((r, c));
                true
            }
            _ => false,
        }
    }

    /// Number of intact cells.
    pub fn remaining(&self) -> usize {
        self.afloat.count_ones()
    }

    pub fn is_sunk(&self) -> bool {
        self.afloat.is_empty()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship({}, {:?}, {}) {{ remaining: {} }}",
            self.length,
            self.anchor,
            self.orientation,
            self.remaining()
        )
    }
}

// Cells only move away from the origin, so once the moving axis passes the
// far edge (or the fixed axis is off the grid) nothing further can land on it.
fn past_far_edge(cell: Coordinate, orientation: Orientation) -> bool {
    let (along, across) = match orientation {
        Orientation::Row => (cell.col, cell.row),
        Orientation::Column => (cell.row, cell.col),
    };
    let edge = GRID_SIZE as i32;
    along >= edge || across < 0 || across >= edge
}

/// Iterator over the cells a hull covers, anchor first.
#[derive(Debug, Clone)]
pub struct Footprint {
    next: Option<Coordinate>,
    remaining: usize,
    along_row: bool,
}

impl Footprint {
    fn new(origin: Coordinate, orientation: Orientation, length: usize) -> Self {
        Footprint {
            next: Some(origin),
            remaining: length,
            along_row: orientation == Orientation::Row,
        }
    }
}

impl Iterator for Footprint {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        if self.remaining == 0 {
            return None;
        }
        let cell = self.next?;
        self.remaining -= 1;
        self.next = cell.offset(1, self.along_row);
        Some(cell)
    }
}
