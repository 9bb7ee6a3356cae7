use anyhow::{Context, Result};
use chessnote_gen::pgn::{parse_each, GameCorpus, GameRecord, ParseMode};
use log::{info, warn};
use std::path::PathBuf;

pub fn parse_pgn_file(
    pgn_file_path: &PathBuf,
    mode: ParseMode,
    keep_going: bool,
) -> Result<Vec<GameRecord>> {
    let pgn = std::fs::read_to_string(pgn_file_path).context(format!(
        "Could not read {}",
        pgn_file_path.to_string_lossy()
    ))?;

    if !keep_going {
        let corpus = GameCorpus::parse(&pgn, mode)?;
        info!("{} games read", corpus.len());
        return Ok(corpus.into_iter().collect());
    }

    let mut games = Vec::new();
    for (index, result) in parse_each(&pgn, mode).into_iter().enumerate() {
        match result {
            Ok(game) => games.push(game),
            Err(err) => warn!("Skipping game {}: {}", index + 1, err),
        }
    }
    info!("{} games read", games.len());

    Ok(games)
}
