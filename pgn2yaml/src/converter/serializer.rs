use crate::converter::interpreter::{
    CheckType, DetailedGame, DetailedMove, DetailedMoveInfo, GameEnding, MoveType,
};
use anyhow::{Context, Result};
use chessnote_gen::san::PromotionPieces;
use serde::ser::SerializeMap;
use serde::Serialize;
use std::path::PathBuf;

impl Serialize for DetailedMoveInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut entries = 2;
        if self.target.is_some() {
            entries += 1;
        }
        if self.move_type != MoveType::Normal {
            entries += 1;
        }
        if self.check_type.is_some() {
            entries += 1;
        }

        let mut map = serializer.serialize_map(Some(entries))?;

        map.serialize_entry("short", &self.short)?;
        map.serialize_entry("piece", &self.piece)?;
        if let Some(target) = &self.target {
            map.serialize_entry("target", target)?;
        }
        if self.move_type != MoveType::Normal {
            map.serialize_entry(
                "type",
                match &self.move_type {
                    MoveType::Normal => unreachable!(),
                    MoveType::Capture => "capture",
                    MoveType::Promotion(piece) => match piece {
                        PromotionPieces::Knight => "promotion to knight",
                        PromotionPieces::Bishop => "promotion to bishop",
                        PromotionPieces::Rook => "promotion to rook",
                        PromotionPieces::Queen => "promotion to queen",
                    },
                    MoveType::PromotionWithCapture(piece) => match piece {
                        PromotionPieces::Knight => "promotion to knight with capture",
                        PromotionPieces::Bishop => "promotion to bishop with capture",
                        PromotionPieces::Rook => "promotion to rook with capture",
                        PromotionPieces::Queen => "promotion to queen with capture",
                    },
                    MoveType::KingsideCastling => "kingside castling",
                    MoveType::QueensideCastling => "queenside castling",
                },
            )?;
        }

        if let Some(check_type) = &self.check_type {
            map.serialize_entry(
                "check",
                match check_type {
                    CheckType::Check => "check",
                    CheckType::Checkmate => "checkmate",
                },
            )?;
        }

        map.end()
    }
}

impl Serialize for DetailedMove {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let entries = usize::from(self.white.is_some()) + usize::from(self.black.is_some());
        let mut map = serializer.serialize_map(Some(entries))?;

        if let Some(white) = &self.white {
            map.serialize_entry("white", white)?;
        }
        if let Some(black) = &self.black {
            map.serialize_entry("black", black)?;
        }

        map.end()
    }
}

struct SerializedMoveList<'a>(&'a Vec<DetailedMove>);

impl<'a> Serialize for SerializedMoveList<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;

        for mv in self.0 {
            map.serialize_entry(&mv.number, mv)?;
        }

        map.end()
    }
}

struct SerializedGameEnding(GameEnding);

impl Serialize for SerializedGameEnding {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;

        let (result_str, reason_str) = match self.0 {
            GameEnding::Unfinished => ("*", "unfinished"),
            GameEnding::Draw => ("1/2-1/2", "draw"),
            GameEnding::WhiteWinsCheckmate => ("1-0", "checkmate"),
            GameEnding::BlackWinsCheckmate => ("0-1", "checkmate"),
            GameEnding::WhiteWins => ("1-0", "white wins"),
            GameEnding::BlackWins => ("0-1", "black wins"),
        };
        map.serialize_entry("result", result_str)?;
        map.serialize_entry("reason", reason_str)?;

        map.end()
    }
}

impl Serialize for DetailedGame {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let entries = if self.initial_position.is_some() { 5 } else { 4 };
        let mut map = serializer.serialize_map(Some(entries))?;

        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("tags", &self.tags)?;
        if let Some(position) = &self.initial_position {
            map.serialize_entry("fen", position.fen())?;
        }
        map.serialize_entry("ending", &SerializedGameEnding(self.ending))?;
        map.serialize_entry("moves", &SerializedMoveList(&self.moves))?;

        map.end()
    }
}

pub fn write_yaml(yaml_path: &PathBuf, games: &[DetailedGame]) -> Result<()> {
    let output = std::fs::File::create(yaml_path).context(format!(
        "Could not open file {} for writing",
        yaml_path.to_string_lossy()
    ))?;

    serde_yaml::to_writer(output, games).context(format!(
        "Error writing YAML data to {}",
        yaml_path.to_string_lossy()
    ))
}
