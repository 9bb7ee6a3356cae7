use super::ParseMode;
use crate::error::{NotationError, Result};

use log::debug;
use serde::Serialize;
use std::collections::HashMap;

/// Tags accepted by the strict parser.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum RecognizedTag {
    Event,
    Site,
    Date,
    White,
    Black,
    WhiteElo,
    BlackElo,
    TimeControl,
    Termination,
    Result,
    Round,
}

impl RecognizedTag {
    pub const ALL: [RecognizedTag; 11] = [
        RecognizedTag::Event,
        RecognizedTag::Site,
        RecognizedTag::Date,
        RecognizedTag::White,
        RecognizedTag::Black,
        RecognizedTag::WhiteElo,
        RecognizedTag::BlackElo,
        RecognizedTag::TimeControl,
        RecognizedTag::Termination,
        RecognizedTag::Result,
        RecognizedTag::Round,
    ];

    /// Lower-case key, as stored in the tag map.
    pub fn key(&self) -> &'static str {
        match self {
            RecognizedTag::Event => "event",
            RecognizedTag::Site => "site",
            RecognizedTag::Date => "date",
            RecognizedTag::White => "white",
            RecognizedTag::Black => "black",
            RecognizedTag::WhiteElo => "whiteelo",
            RecognizedTag::BlackElo => "blackelo",
            RecognizedTag::TimeControl => "timecontrol",
            RecognizedTag::Termination => "termination",
            RecognizedTag::Result => "result",
            RecognizedTag::Round => "round",
        }
    }

    pub fn try_from_key(key: &str) -> Option<Self> {
        RecognizedTag::ALL
            .into_iter()
            .find(|tag| tag.key().eq_ignore_ascii_case(key))
    }

    pub fn allowed_keys() -> Vec<&'static str> {
        RecognizedTag::ALL.iter().map(RecognizedTag::key).collect()
    }
}

/// The recognized tags of a game, one field each.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Headers {
    pub event: Option<String>,
    pub site: Option<String>,
    pub date: Option<String>,
    pub white: Option<String>,
    pub black: Option<String>,
    pub white_elo: Option<String>,
    pub black_elo: Option<String>,
    pub time_control: Option<String>,
    pub termination: Option<String>,
    pub result: Option<String>,
    pub round: Option<String>,
}

impl Headers {
    fn slot(&mut self, tag: RecognizedTag) -> &mut Option<String> {
        match tag {
            RecognizedTag::Event => &mut self.event,
            RecognizedTag::Site => &mut self.site,
            RecognizedTag::Date => &mut self.date,
            RecognizedTag::White => &mut self.white,
            RecognizedTag::Black => &mut self.black,
            RecognizedTag::WhiteElo => &mut self.white_elo,
            RecognizedTag::BlackElo => &mut self.black_elo,
            RecognizedTag::TimeControl => &mut self.time_control,
            RecognizedTag::Termination => &mut self.termination,
            RecognizedTag::Result => &mut self.result,
            RecognizedTag::Round => &mut self.round,
        }
    }

    pub fn get(&self, tag: RecognizedTag) -> Option<&str> {
        match tag {
            RecognizedTag::Event => self.event.as_deref(),
            RecognizedTag::Site => self.site.as_deref(),
            RecognizedTag::Date => self.date.as_deref(),
            RecognizedTag::White => self.white.as_deref(),
            RecognizedTag::Black => self.black.as_deref(),
            RecognizedTag::WhiteElo => self.white_elo.as_deref(),
            RecognizedTag::BlackElo => self.black_elo.as_deref(),
            RecognizedTag::TimeControl => self.time_control.as_deref(),
            RecognizedTag::Termination => self.termination.as_deref(),
            RecognizedTag::Result => self.result.as_deref(),
            RecognizedTag::Round => self.round.as_deref(),
        }
    }
}

/// Splits a `[Key "value"]` line into its lower-cased key and unquoted value.
pub(crate) fn tag_pair(line: &str) -> (String, String) {
    let inner = line.trim().trim_matches(|c| c == '[' || c == ']');
    let (key, value) = inner
        .split_once(char::is_whitespace)
        .unwrap_or((inner, ""));

    (
        key.trim().to_lowercase(),
        value.trim().trim_matches('"').to_string(),
    )
}

/// Tags and move text lines of a single game, before the move text is lexed.
pub(crate) struct TagSection<'a> {
    pub tags: HashMap<String, String>,
    pub headers: Headers,
    pub movetext_lines: Vec<&'a str>,
}

pub(crate) fn tokenize(pgn: &str, mode: ParseMode) -> Result<TagSection<'_>> {
    let starts_with_event = pgn
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| line.starts_with('['))
        .map(|line| tag_pair(line).0 == RecognizedTag::Event.key())
        .unwrap_or(false);

    if !starts_with_event {
        return Err(NotationError::NotAGameRecord);
    }

    let mut section = TagSection {
        tags: HashMap::new(),
        headers: Headers::default(),
        movetext_lines: Vec::new(),
    };

    for line in pgn.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }

        if !line.starts_with('[') {
            section.movetext_lines.push(line);
            continue;
        }

        let (key, value) = tag_pair(line);

        match RecognizedTag::try_from_key(&key) {
            Some(tag) => *section.headers.slot(tag) = Some(value.clone()),
            None => match mode {
                ParseMode::Strict => {
                    return Err(NotationError::UnrecognizedTag {
                        key,
                        allowed: RecognizedTag::allowed_keys(),
                    })
                }
                ParseMode::Permissive => debug!("keeping unrecognized tag {:?}", key),
            },
        }

        section.tags.insert(key, value);
    }

    Ok(section)
}
