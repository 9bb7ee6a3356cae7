mod converter;
mod reader;

use crate::converter::write_games;
use crate::reader::parse_pgn_file;
use anyhow::{Context, Result};
use chessnote_gen::pgn::ParseMode;
use clap::Parser;
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// PGN file, with one or more games
    file: String,

    /// Path of the YAML file (if not specified, same as the PGN file with the extension changed)
    #[arg(short, long)]
    output: Option<String>,

    /// Keep tags outside of the Seven Tag Roster and the supplemental set
    #[arg(long)]
    permissive: bool,

    /// Skip malformed games instead of stopping at the first one
    #[arg(long)]
    keep_going: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let pgn_path = PathBuf::from(cli.file);
    let mode = if cli.permissive {
        ParseMode::Permissive
    } else {
        ParseMode::Strict
    };

    let games =
        parse_pgn_file(&pgn_path, mode, cli.keep_going).context("Unable to parse PGN file")?;

    let yaml_path = cli.output.map_or(
        {
            let mut path = pgn_path;
            path.set_extension("yaml");
            path
        },
        PathBuf::from,
    );
    info!("Writing YAML file to {}", yaml_path.to_string_lossy());
    write_games(&games, &yaml_path)?;

    Ok(())
}
