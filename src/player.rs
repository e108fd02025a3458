//! One side of the match: a grid and the fleet placed on it.

use alloc::vec::Vec;

use crate::common::{GameError, ShotOutcome};
use crate::config::MIN_SHIP_LENGTH;
use crate::coordinate::Coordinate;
use crate::grid::{Cell, Cells, Grid};
use crate::ship::Ship;

/// A player's grid, their fleet in placement order, and the cells the
/// opponent has struck so far.
#[derive(Debug, Clone, Default)]
pub struct Player {
    grid: Grid,
    fleet: Vec<Ship>,
    struck: Cells,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `ship` to the fleet if it is long enough, fits on the grid and
    /// does not touch any intact cell of another ship. Nothing changes on
    /// rejection.
    pub fn try_place_ship(&mut self, ship: Ship) -> Result<(), GameError> {
        if ship.length() < MIN_SHIP_LENGTH {
            return Err(GameError::ShipTooShort {
                length: ship.length(),
            });
        }
        if !self.grid.fits_grid(ship.footprint()) {
            return Err(GameError::OutOfBounds);
        }
        let hull = ship.occupancy();
        if self.fleet.iter().any(|s| s.occupancy().intersects(&hull)) {
            return Err(GameError::Overlap);
        }

        self.grid.apply_ship(&ship);
        self.fleet.push(ship);
        Ok(())
    }

    /// Strike `coord`. Every ship covering the cell loses it and the grid
    /// cell is cleared; sunk ships stay in the fleet until
    /// [`prune_sunk_ships`](Self::prune_sunk_ships).
    pub fn resolve_hit(&mut self, coord: Coordinate) -> ShotOutcome {
        let already = coord
            .index()
            .is_some_and(|(r, c)| self.struck.contains(r, c));
        if let Some(cell) = coord.index() {
            self.struck.insert(cell);
        }

        let mut outcome = ShotOutcome::Miss;
        for ship in self.fleet.iter_mut() {
            if ship.register_hit(coord) {
                self.grid.plot(coord, Cell::Empty);
                if ship.is_sunk() {
                    outcome = ShotOutcome::Sunk;
                } else if outcome == ShotOutcome::Miss {
                    outcome = ShotOutcome::Hit;
                }
            }
        }

        if outcome == ShotOutcome::Miss && already {
            ShotOutcome::AlreadyStruck
        } else {
            outcome
        }
    }

    /// Drop ships with no intact cells left, keeping placement order.
    pub fn prune_sunk_ships(&mut self) {
        self.fleet.retain(|s| !s.is_sunk());
    }

    pub fn remaining_ship_count(&self) -> usize {
        self.fleet.len()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Ships still afloat, in placement order.
    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    /// Cells the opponent has fired at, hit or miss.
    pub fn struck(&self) -> Cells {
        self.struck
    }
}
