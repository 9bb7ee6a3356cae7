use std::fmt;
use thiserror::Error;

/// The field of a FEN record that failed to decode.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FenField {
    /// The record as a whole (wrong number of fields)
    Record,
    Pieces,
    ActiveColor,
    Castling,
    EnPassant,
    HalfmoveClock,
    FullmoveNumber,
}

impl fmt::Display for FenField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match &self {
                FenField::Record => "record",
                FenField::Pieces => "piece placement",
                FenField::ActiveColor => "active color",
                FenField::Castling => "castling availability",
                FenField::EnPassant => "en passant target square",
                FenField::HalfmoveClock => "halfmove clock",
                FenField::FullmoveNumber => "fullmove number",
            }
        )
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum NotationError {
    #[error("{token:?} is not valid SAN")]
    InvalidNotation { token: String },

    #[error("malformed FEN {field}: {value:?}")]
    MalformedFen { field: FenField, value: String },

    #[error("not a valid PGN: does not start with an Event tag")]
    NotAGameRecord,

    #[error("tag {key:?} not in valid tags list: {}", allowed.join(", "))]
    UnrecognizedTag {
        key: String,
        allowed: Vec<&'static str>,
    },

    #[error("malformed move text at {near:?}")]
    MalformedMoveText { near: String },
}

impl NotationError {
    pub(crate) fn invalid_notation(token: &str) -> Self {
        NotationError::InvalidNotation {
            token: token.to_string(),
        }
    }

    pub(crate) fn malformed_fen(field: FenField, value: &str) -> Self {
        NotationError::MalformedFen {
            field,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NotationError>;
