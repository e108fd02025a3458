#![cfg(feature = "std")]

//! Line-oriented script driver around [`Game`].
//!
//! ```text
//! place first 2 A1 ROW
//! fire first B3
//! remaining second
//! state
//! show first
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use serde::Serialize;

use crate::game::{Game, MatchState, Side};
use crate::ship::Orientation;

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Place {
        side: Side,
        length: usize,
        anchor: String,
        orientation: Orientation,
    },
    Fire {
        side: Side,
        target: String,
    },
    Remaining(Side),
    State,
    Show(Side),
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let cmd = match words.as_slice() {
            ["place", side, length, anchor, orientation] => Command::Place {
                side: side.parse()?,
                length: length
                    .parse()
                    .with_context(|| format!("bad ship length {:?}", length))?,
                anchor: anchor.to_string(),
                orientation: orientation.parse()?,
            },
            ["fire", side, target] => Command::Fire {
                side: side.parse()?,
                target: target.to_string(),
            },
            ["remaining", side] => Command::Remaining(side.parse()?),
            ["state"] => Command::State,
            ["show", side] => Command::Show(side.parse()?),
            [verb, ..] => bail!("unrecognised command {:?}", verb),
            [] => bail!("empty command"),
        };
        Ok(cmd)
    }
}

/// Parse a script line; `None` for blank lines and comments.
pub fn parse_line(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    line.parse().map(Some)
}

/// Apply `cmd` to `game` and describe the result.
pub fn execute(game: &mut Game, cmd: &Command) -> String {
    match cmd {
        Command::Place {
            side,
            length,
            anchor,
            orientation,
        } => match game.place(*side, *length, anchor, *orientation) {
            Ok(()) => "ok".to_string(),
            Err(e) => format!("rejected: {}", e),
        },
        Command::Fire { side, target } => match game.fire(*side, target) {
            Ok(outcome) => outcome.to_string(),
            Err(e) => format!("rejected: {}", e),
        },
        Command::Remaining(side) => game.remaining_ship_count(*side).to_string(),
        Command::State => game.match_state().to_string(),
        Command::Show(side) => game.render_grid(*side),
    }
}

/// Run every line of `script` against `game`, writing one result per command.
pub fn run_script<R: BufRead, W: Write>(
    game: &mut Game,
    script: R,
    out: &mut W,
) -> anyhow::Result<()> {
    for (n, line) in script.lines().enumerate() {
        let line = line.with_context(|| format!("reading line {}", n + 1))?;
        let cmd = parse_line(&line).map_err(|e| anyhow!("line {}: {}", n + 1, e))?;
        if let Some(cmd) = cmd {
            let result = execute(game, &cmd);
            if result.ends_with('\n') {
                write!(out, "{}", result)?;
            } else {
                writeln!(out, "{}", result)?;
            }
        }
    }
    Ok(())
}

/// Remaining ships per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Remaining {
    pub first: usize,
    pub second: usize,
}

/// End-of-script snapshot printed by `--json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub state: MatchState,
    pub turn: Side,
    pub remaining: Remaining,
}

impl Summary {
    pub fn of(game: &Game) -> Self {
        Summary {
            state: game.match_state(),
            turn: game.whose_turn(),
            remaining: Remaining {
                first: game.remaining_ship_count(Side::First),
                second: game.remaining_ship_count(Side::Second),
            },
        }
    }
}
