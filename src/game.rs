//! Match orchestration: two players, the turn, and the match state.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use log::{debug, info, trace};

use crate::common::{GameError, ShotOutcome};
use crate::coordinate::translate;
use crate::player::Player;
use crate::ship::{Orientation, Ship};

/// One of the two player slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

impl FromStr for Side {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first" => Ok(Side::First),
            "second" => Ok(Side::Second),
            _ => Err(GameError::UnknownPlayer(s.to_string())),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::First => "first",
            Side::Second => "second",
        })
    }
}

/// Overall match state. Both `*Won` states are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum MatchState {
    Unfinished,
    FirstWon,
    SecondWon,
}

impl MatchState {
    /// Winning state for `side`.
    pub fn won_by(side: Side) -> Self {
        match side {
            Side::First => MatchState::FirstWon,
            Side::Second => MatchState::SecondWon,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            MatchState::Unfinished => None,
            MatchState::FirstWon => Some(Side::First),
            MatchState::SecondWon => Some(Side::Second),
        }
    }

    pub fn is_finished(self) -> bool {
        self != MatchState::Unfinished
    }
}

impl fmt::Display for MatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchState::Unfinished => "UNFINISHED",
            MatchState::FirstWon => "FIRST_WON",
            MatchState::SecondWon => "SECOND_WON",
        })
    }
}

/// A single match between `first` and `second`. `first` fires first.
#[derive(Debug, Clone)]
pub struct Game {
    players: [Player; 2],
    turn: Side,
    state: MatchState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Game {
            players: [Player::new(), Player::new()],
            turn: Side::First,
            state: MatchState::Unfinished,
        }
    }

    /// Place a ship for `side`, reporting why it was refused.
    ///
    /// Placement is not tied to the match state; ships may be added at any
    /// point, including after shots have been fired.
    pub fn place(
        &mut self,
        side: Side,
        length: usize,
        anchor: &str,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        let result = Ship::new(length, anchor, orientation)
            .and_then(|ship| self.player_mut(side).try_place_ship(ship));
        match &result {
            Ok(()) => debug!(
                "{} placed {}-cell ship at {} {}",
                side, length, anchor, orientation
            ),
            Err(e) => debug!("{} placement at {} rejected: {}", side, anchor, e),
        }
        result
    }

    /// Boolean form of [`place`](Self::place).
    pub fn place_ship(
        &mut self,
        side: Side,
        length: usize,
        anchor: &str,
        orientation: Orientation,
    ) -> bool {
        self.place(side, length, anchor, orientation).is_ok()
    }

    /// Take `attacker`'s turn by firing at `target`.
    ///
    /// Any accepted shot, hit or miss, passes the turn to the defender. A
    /// rejected shot changes nothing.
    pub fn fire(&mut self, attacker: Side, target: &str) -> Result<ShotOutcome, GameError> {
        if self.state.is_finished() {
            return Err(GameError::MatchOver);
        }
        if attacker != self.turn {
            return Err(GameError::NotYourTurn);
        }
        let coord = translate(target)?;

        let defender = attacker.opponent();
        let fleet = self.player_mut(defender);
        let outcome = fleet.resolve_hit(coord);
        fleet.prune_sunk_ships();
        trace!("{} fired at {}: {}", attacker, target, outcome);

        if outcome.is_hit() && fleet.remaining_ship_count() == 0 {
            self.state = MatchState::won_by(attacker);
            info!("{} sank the last ship; {}", attacker, self.state);
        }
        self.turn = defender;
        Ok(outcome)
    }

    /// Boolean form of [`fire`](Self::fire): true when the turn was accepted,
    /// whatever the shot hit.
    pub fn fire_torpedo(&mut self, attacker: Side, target: &str) -> bool {
        match self.fire(attacker, target) {
            Ok(_) => true,
            Err(e) => {
                debug!("{} shot at {} rejected: {}", attacker, target, e);
                false
            }
        }
    }

    pub fn remaining_ship_count(&self, side: Side) -> usize {
        self.player(side).remaining_ship_count()
    }

    pub fn match_state(&self) -> MatchState {
        self.state
    }

    /// Player allowed to fire next.
    pub fn whose_turn(&self) -> Side {
        self.turn
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    fn player_mut(&mut self, side: Side) -> &mut Player {
        &mut self.players[side.index()]
    }

    /// Text dump of `side`'s grid.
    pub fn render_grid(&self, side: Side) -> String {
        self.player(side).grid().render()
    }
}
