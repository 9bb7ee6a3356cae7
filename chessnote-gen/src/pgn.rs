mod corpus;
mod movetext;
mod tags;


pub use self::corpus::{parse_each, segment, GameCorpus, Segments};
pub use self::tags::{Headers, RecognizedTag};

use self::movetext::mainline;
use crate::error::{NotationError, Result};
use crate::fen::Position;
use crate::san::SanMove;

use serde::Serialize;
use sha2::{Digest, Sha224};
use std::{collections::HashMap, fmt, str::FromStr};

/// How to treat tags outside of the recognized set.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ParseMode {
    /// Unrecognized tags are an error
    #[default]
    Strict,
    /// Unrecognized tags are kept in the tag map
    Permissive,
}

/// Trims the text and collapses runs of spaces, so that equivalent games hash alike.
fn canonicalize(pgn: &str) -> String {
    let mut canonical = String::with_capacity(pgn.len());
    for c in pgn.trim().chars() {
        if c == ' ' && canonical.ends_with(' ') {
            continue;
        }
        canonical.push(c);
    }
    canonical
}

/// A single game of a PGN file.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GameRecord {
    #[serde(skip)]
    pgn: String,
    unique_id: String,
    tags: HashMap<String, String>,
    headers: Headers,
    movetext: String,
    moves: Vec<String>,
    result: Option<String>,
}

impl GameRecord {
    pub fn parse(pgn: &str, mode: ParseMode) -> Result<GameRecord> {
        let pgn = canonicalize(pgn);
        let section = tags::tokenize(&pgn, mode)?;

        let movetext = section
            .movetext_lines
            .join(" ")
            .split_whitespace()
            .collect::<Vec<&str>>()
            .join(" ");
        let move_list = mainline(&section.movetext_lines.join("\n"))?;
        let unique_id = format!("{:x}", Sha224::digest(pgn.as_bytes()));

        Ok(GameRecord {
            tags: section.tags,
            headers: section.headers,
            movetext,
            moves: move_list.moves,
            result: move_list.result,
            unique_id,
            pgn,
        })
    }

    /// The canonical text the record was parsed from.
    pub fn pgn(&self) -> &str {
        &self.pgn
    }

    /// SHA-224 of the canonical text, in hexadecimal.
    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn tags(&self) -> &HashMap<String, String> {
        &self.tags
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(&key.to_lowercase()).map(String::as_str)
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// All move text lines joined, with whitespace collapsed.
    pub fn movetext(&self) -> &str {
        &self.movetext
    }

    /// Mainline SAN tokens, in order.
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    /// Game termination marker found at the end of the move text.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn san_moves(&self) -> Result<Vec<SanMove>> {
        self.moves
            .iter()
            .map(|mv| SanMove::try_from_str(mv))
            .collect()
    }

    /// Starting position given by a `FEN` tag, if there is one.
    pub fn initial_position(&self) -> Result<Option<Position>> {
        self.tag("fen").map(Position::try_from_fen).transpose()
    }
}

impl FromStr for GameRecord {
    type Err = NotationError;

    fn from_str(pgn: &str) -> Result<Self> {
        GameRecord::parse(pgn, ParseMode::Strict)
    }
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Game <{} vs {}>",
            self.headers.white.as_deref().unwrap_or("white"),
            self.headers.black.as_deref().unwrap_or("black")
        )
    }
}
