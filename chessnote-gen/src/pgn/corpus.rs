use super::{GameRecord, ParseMode};
use crate::error::Result;

use log::debug;
use std::collections::HashMap;

const GAME_START: &str = "[Event";

fn is_game_start(line: &str) -> bool {
    line.strip_prefix(GAME_START)
        .and_then(|rest| rest.chars().next())
        .map_or(false, char::is_whitespace)
}

/// Iterator over the single-game chunks of a multi-game PGN text.
///
/// A new chunk starts at every `[Event ...]` line, except the first line of
/// the text. Whatever precedes the first Event tag becomes a chunk of its own.
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let mut end = 0;
        for line in self.rest.split_inclusive('\n') {
            if end > 0 && is_game_start(line) {
                break;
            }
            end += line.len();
        }

        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}

pub fn segment(pgn: &str) -> Segments<'_> {
    Segments { rest: pgn.trim() }
}

/// Games of a multi-game PGN text, in the order they appear.
#[derive(Clone, Debug, Default)]
pub struct GameCorpus {
    games: Vec<GameRecord>,
    by_id: HashMap<String, usize>,
}

impl GameCorpus {
    /// Parses every game, stopping at the first one that fails.
    ///
    /// Besides the tag and record errors, a game whose move text has an
    /// unbalanced comment or variation fails with `MalformedMoveText`, and
    /// that also stops the whole corpus. Use [`parse_each`] to skip it.
    pub fn parse(pgn: &str, mode: ParseMode) -> Result<GameCorpus> {
        let mut corpus = GameCorpus::default();

        for (index, chunk) in segment(pgn).enumerate() {
            debug!("parsing game {} ({} bytes)", index + 1, chunk.len());
            corpus.push(GameRecord::parse(chunk, mode)?);
        }

        Ok(corpus)
    }

    fn push(&mut self, game: GameRecord) {
        if self.by_id.contains_key(game.unique_id()) {
            debug!("duplicated game {}", game.unique_id());
        } else {
            self.by_id
                .insert(game.unique_id().to_string(), self.games.len());
        }
        self.games.push(game);
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GameRecord> {
        self.games.iter()
    }

    /// First game with the given identifier.
    pub fn get(&self, unique_id: &str) -> Option<&GameRecord> {
        self.by_id.get(unique_id).map(|&index| &self.games[index])
    }

    /// Games in order, skipping repeats of an identifier already seen.
    pub fn unique(&self) -> impl Iterator<Item = &GameRecord> {
        self.games
            .iter()
            .enumerate()
            .filter(move |(index, game)| self.by_id.get(game.unique_id()) == Some(index))
            .map(|(_, game)| game)
    }
}

impl IntoIterator for GameCorpus {
    type Item = GameRecord;
    type IntoIter = std::vec::IntoIter<GameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.games.into_iter()
    }
}

impl<'a> IntoIterator for &'a GameCorpus {
    type Item = &'a GameRecord;
    type IntoIter = std::slice::Iter<'a, GameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.games.iter()
    }
}

/// Parses every game on its own: a malformed game does not stop the rest.
pub fn parse_each(pgn: &str, mode: ParseMode) -> Vec<Result<GameRecord>> {
    segment(pgn)
        .map(|chunk| GameRecord::parse(chunk, mode))
        .collect()
}
