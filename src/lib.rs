//! Rules engine for a two-player game of Battleship on 10x10 grids.
//!
//! [`Game`] is the entry point: place ships for each [`Side`], then alternate
//! [`Game::fire_torpedo`] calls until one fleet is gone.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod common;
pub mod config;
mod coordinate;
#[cfg(feature = "std")]
pub mod driver;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
mod ship;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use common::{GameError, ShotOutcome};
pub use config::{GRID_SIZE, MIN_SHIP_LENGTH};
pub use coordinate::{translate, Coordinate};
pub use game::{Game, MatchState, Side};
pub use grid::{Cell, Cells, Grid};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::Player;
pub use ship::{Footprint, Orientation, Ship};
