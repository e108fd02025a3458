//! A player's 10x10 occupancy grid.

use alloc::string::{String, ToString};
use core::fmt;

use crate::bitboard::BitBoard;
use crate::config::{GRID_SIZE, ROW_LABELS};
use crate::coordinate::Coordinate;
use crate::ship::Ship;

/// Cell set sized for one player's grid.
pub type Cells = BitBoard<u128, GRID_SIZE>;

/// Stored value of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied,
}

/// Occupancy map for one player. Cells are set when a ship is placed and
/// cleared again when that part of the ship is hit.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Grid {
    occupied: Cells,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff every cell lies on the grid. This is the only bounds check
    /// the engine performs.
    pub fn fits_grid<I>(&self, cells: I) -> bool
    where
        I: IntoIterator<Item = Coordinate>,
    {
        cells.into_iter().all(|c| c.is_on_grid())
    }

    /// Store `value` at `coord`. Off-grid coordinates are ignored; callers
    /// validate with [`fits_grid`](Self::fits_grid) first.
    pub fn plot(&mut self, coord: Coordinate, value: Cell) {
        if let Some(cell) = coord.index() {
            match value {
                Cell::Occupied => self.occupied.insert(cell),
                Cell::Empty => self.occupied.remove(cell),
            }
        }
    }

    /// Mark every intact cell of `ship` as occupied.
    pub fn apply_ship(&mut self, ship: &Ship) {
        for cell in ship.cells() {
            self.plot(cell, Cell::Occupied);
        }
    }

    /// Value at `coord`, `None` off the grid.
    pub fn value_at(&self, coord: Coordinate) -> Option<Cell> {
        let (r, c) = coord.index()?;
        Some(if self.occupied.contains(r, c) {
            Cell::Occupied
        } else {
            Cell::Empty
        })
    }

    pub fn occupied(&self) -> Cells {
        self.occupied
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.count_ones()
    }

    /// Text snapshot: a header of column numbers, then one line per row with
    /// `x` for occupied cells.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(" ")?;
        for col in 1..=GRID_SIZE {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;
        for (r, label) in ROW_LABELS.iter().enumerate() {
            write!(f, "{} ", label)?;
            for c in 0..GRID_SIZE {
                f.write_str(if self.occupied.contains(r, c) { "x " } else { "  " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("occupied", &self.occupied)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::Orientation;

    #[test]
    fn render_marks_ship_cells() {
        let mut grid = Grid::new();
        grid.apply_ship(&Ship::new(3, "B2", Orientation::Row).unwrap());
        let text = grid.render();
        let lines: alloc::vec::Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), GRID_SIZE + 1);
        assert_eq!(lines[0], "  1 2 3 4 5 6 7 8 9 10");
        assert_eq!(lines[1], format!("A {}", "  ".repeat(GRID_SIZE)));
        assert_eq!(lines[2], format!("B   x x x {}", "  ".repeat(GRID_SIZE - 4)));
    }

    #[test]
    fn plot_ignores_off_grid() {
        let mut grid = Grid::new();
        grid.plot(Coordinate::new(0, 10), Cell::Occupied);
        grid.plot(Coordinate::new(-1, 0), Cell::Occupied);
        assert_eq!(grid.occupied_count(), 0);
    }
}
