//! Fixed board geometry and engine constants.

/// Side length of every player's square grid.
pub const GRID_SIZE: usize = 10;

/// Shortest hull a player may place.
pub const MIN_SHIP_LENGTH: usize = 2;

/// Row labels, top to bottom.
pub const ROW_LABELS: [char; GRID_SIZE] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

/// Environment variable read by [`crate::init_logging`] for the log level.
pub const LOG_ENV_VAR: &str = "SHIPGAME_LOG";

/// Index of a row label, if it is one of [`ROW_LABELS`].
pub fn row_index(label: char) -> Option<usize> {
    ROW_LABELS.iter().position(|&l| l == label)
}
