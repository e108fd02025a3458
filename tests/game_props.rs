use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use shipgame::{
    Coordinate, Game, MatchState, Orientation, Ship, ShotOutcome, Side, GRID_SIZE,
};

fn label(row: usize, col: usize) -> String {
    Coordinate::from((row, col)).label().unwrap()
}

fn orientation(rng: &mut SmallRng) -> Orientation {
    if rng.random() {
        Orientation::Row
    } else {
        Orientation::Column
    }
}

/// Try a handful of random placements for each side; returns the game.
fn random_game(seed: u64) -> Game {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new();
    for side in Side::BOTH {
        for _ in 0..8 {
            let length = rng.random_range(2..=5);
            let anchor = label(
                rng.random_range(0..GRID_SIZE),
                rng.random_range(0..GRID_SIZE),
            );
            game.place_ship(side, length, &anchor, orientation(&mut rng));
        }
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A ship's cells are a contiguous run from the anchor along its axis.
    #[test]
    fn footprint_shape(
        row in 0..GRID_SIZE,
        col in 0..GRID_SIZE,
        length in 2usize..=10,
        along_row in any::<bool>()
    ) {
        let orient = if along_row { Orientation::Row } else { Orientation::Column };
        let ship = Ship::new(length, &label(row, col), orient).unwrap();
        let cells: Vec<_> = ship.footprint().collect();
        prop_assert_eq!(cells.len(), length);
        for (i, cell) in cells.iter().enumerate() {
            let expected = if along_row {
                Coordinate::new(row as i32, (col + i) as i32)
            } else {
                Coordinate::new((row + i) as i32, col as i32)
            };
            prop_assert_eq!(*cell, expected);
        }
    }

    /// Placed fleets never share a cell, and the grid mirrors the fleet.
    #[test]
    fn fleets_never_overlap(seed in any::<u64>()) {
        let game = random_game(seed);
        for side in Side::BOTH {
            let player = game.player(side);
            let mut seen = 0usize;
            let mut union = shipgame::Cells::new();
            for ship in player.fleet() {
                prop_assert!(!union.intersects(&ship.occupancy()));
                union |= ship.occupancy();
                seen += ship.remaining();
            }
            prop_assert_eq!(union, player.grid().occupied());
            prop_assert_eq!(seen, player.grid().occupied_count());
        }
    }

    /// Random play: rejected shots change nothing, accepted shots flip the
    /// turn, and once won the state never changes.
    #[test]
    fn random_play_invariants(seed in any::<u64>(), shots in 1usize..300) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = random_game(seed);
        let mut winner: Option<MatchState> = None;

        for _ in 0..shots {
            let shooter = if rng.random_bool(0.8) {
                game.whose_turn()
            } else {
                game.whose_turn().opponent()
            };
            let target = label(
                rng.random_range(0..GRID_SIZE),
                rng.random_range(0..GRID_SIZE),
            );
            let turn = game.whose_turn();
            let before = game.remaining_ship_count(shooter.opponent());
            let accepted = game.fire_torpedo(shooter, &target);

            if let Some(state) = winner {
                prop_assert!(!accepted);
                prop_assert_eq!(game.match_state(), state);
            }
            if accepted {
                prop_assert_eq!(shooter, turn);
                prop_assert_eq!(game.whose_turn(), turn.opponent());
                prop_assert!(game.remaining_ship_count(shooter.opponent()) <= before);
            } else {
                prop_assert_eq!(game.whose_turn(), turn);
                prop_assert_eq!(game.remaining_ship_count(shooter.opponent()), before);
            }
            if winner.is_none() && game.match_state() != MatchState::Unfinished {
                prop_assert_eq!(game.match_state(), MatchState::won_by(shooter));
                prop_assert_eq!(game.remaining_ship_count(shooter.opponent()), 0);
                winner = Some(game.match_state());
            }
        }
    }

    /// Sweeping every cell of the second player's grid sinks the whole fleet.
    #[test]
    fn full_sweep_wins(seed in any::<u64>()) {
        let mut game = random_game(seed);
        prop_assume!(game.remaining_ship_count(Side::Second) > 0);

        let mut sunk = 0;
        'sweep: for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let outcome = game.fire(Side::First, &label(r, c)).unwrap();
                if outcome == ShotOutcome::Sunk {
                    sunk += 1;
                }
                if game.match_state() != MatchState::Unfinished {
                    break 'sweep;
                }
                // second answers with a shot off the grid
                prop_assert_eq!(game.fire(Side::Second, "A11").unwrap(), ShotOutcome::Miss);
            }
        }
        prop_assert_eq!(game.match_state(), MatchState::FirstWon);
        prop_assert_eq!(game.remaining_ship_count(Side::Second), 0);
        prop_assert!(sunk >= 1);
    }
}
