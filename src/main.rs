use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use shipgame::{driver, init_logging, Game};

/// Play a scripted match of Battleship.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Script of place/fire/remaining/state/show commands. Reads stdin if omitted.
    script: Option<PathBuf>,
    /// Print a JSON summary of the match after the script finishes.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut game = Game::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening script {}", path.display()))?;
            driver::run_script(&mut game, BufReader::new(file), &mut out)?;
        }
        None => driver::run_script(&mut game, io::stdin().lock(), &mut out)?,
    }

    if cli.json {
        writeln!(out, "{}", serde_json::to_string(&driver::Summary::of(&game))?)?;
    }
    Ok(())
}
