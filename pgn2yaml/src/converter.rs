mod interpreter;
mod serializer;

use self::interpreter::interpret;
use self::serializer::write_yaml;
use anyhow::{Context, Result};
use chessnote_gen::pgn::GameRecord;
use std::path::PathBuf;

pub fn write_games(games: &[GameRecord], path: &PathBuf) -> Result<()> {
    let detailed_games = games
        .iter()
        .map(|game| interpret(game).context(format!("Cannot convert {}", game)))
        .collect::<Result<Vec<_>>>()?;
    write_yaml(path, &detailed_games)?;
    Ok(())
}
