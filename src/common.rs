//! Shared engine types: the error enum and shot outcomes.

use alloc::string::String;
use core::fmt;

use crate::bitboard::BitBoardError;

/// What an accepted shot did to the defending fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum ShotOutcome {
    /// No ship occupies the target.
    Miss,
    /// A ship was struck and is still afloat.
    Hit,
    /// The last intact cell of a ship was struck.
    Sunk,
    /// The target had already been struck earlier; nothing changed.
    AlreadyStruck,
}

impl ShotOutcome {
    /// `Hit` or `Sunk`.
    pub fn is_hit(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShotOutcome::Miss => "miss",
            ShotOutcome::Hit => "hit",
            ShotOutcome::Sunk => "sunk",
            ShotOutcome::AlreadyStruck => "already struck",
        };
        f.write_str(s)
    }
}

/// Reasons the engine refuses a request. Every rejection leaves the match
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Label is not a row letter `A`-`J` followed by a number.
    InvalidCoordinate(String),
    /// Player name is neither `first` nor `second`.
    UnknownPlayer(String),
    /// Orientation is neither `ROW` nor `COLUMN`.
    UnknownOrientation(String),
    /// Hull shorter than the minimum length.
    ShipTooShort { length: usize },
    /// Some cell of the ship falls off the grid.
    OutOfBounds,
    /// Ship would share a cell with one already in the fleet.
    Overlap,
    /// The attacker does not hold the turn.
    NotYourTurn,
    /// The match already has a winner.
    MatchOver,
    /// Underlying cell-set error.
    CellIndex(BitBoardError),
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::CellIndex(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidCoordinate(label) => write!(f, "invalid coordinate {:?}", label),
            GameError::UnknownPlayer(name) => write!(f, "unknown player {:?}", name),
            GameError::UnknownOrientation(name) => write!(f, "unknown orientation {:?}", name),
            GameError::ShipTooShort { length } => {
                write!(f, "ship of length {} is shorter than the minimum", length)
            }
            GameError::OutOfBounds => write!(f, "ship does not fit on the grid"),
            GameError::Overlap => write!(f, "ship overlaps another ship"),
            GameError::NotYourTurn => write!(f, "it is not this player's turn"),
            GameError::MatchOver => write!(f, "the match is already over"),
            GameError::CellIndex(e) => write!(f, "cell error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
