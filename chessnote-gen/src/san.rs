mod grammar;


use self::grammar::{CheckSuffix, SanParts};
use crate::board::{PieceType, Square};
use crate::error::{NotationError, Result};

use log::trace;
use serde::Serialize;
use std::{fmt, str::FromStr};

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionPieces {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromotionPieces {
    pub fn try_from_char(value: char) -> Option<Self> {
        match value {
            'N' => Some(PromotionPieces::Knight),
            'B' => Some(PromotionPieces::Bishop),
            'R' => Some(PromotionPieces::Rook),
            'Q' => Some(PromotionPieces::Queen),
            _ => None,
        }
    }
}

impl From<PromotionPieces> for PieceType {
    fn from(value: PromotionPieces) -> Self {
        match value {
            PromotionPieces::Knight => PieceType::Knight,
            PromotionPieces::Bishop => PieceType::Bishop,
            PromotionPieces::Rook => PieceType::Rook,
            PromotionPieces::Queen => PieceType::Queen,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CastleSide {
    Kingside,  // O-O
    Queenside, // O-O-O
}

/// A move token classified against the SAN grammar.
///
/// Classification is purely syntactic: nothing here knows whether the move is
/// legal, or even possible, on any board.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SanMove {
    san: String,
    piece: PieceType,
    target: Option<Square>,
    from_file: Option<usize>,
    from_rank: Option<usize>,
    capture: bool,
    check: bool,
    checkmate: bool,
    castle: Option<CastleSide>,
    promotion: Option<PromotionPieces>,
}

impl SanMove {
    pub fn try_from_str(san: &str) -> Result<SanMove> {
        let Ok((_, (parts, suffix))) = grammar::san(san) else {
            trace!("rejected SAN token {:?}", san);
            return Err(NotationError::invalid_notation(san));
        };

        let SanParts {
            piece,
            from_file,
            from_rank,
            capture,
            target,
            promotion,
            castle,
        } = parts;

        Ok(SanMove {
            san: san.to_string(),
            piece,
            target,
            from_file,
            from_rank,
            capture,
            check: suffix.is_some(),
            checkmate: suffix == Some(CheckSuffix::Checkmate),
            castle,
            promotion,
        })
    }

    /// The token exactly as it was classified.
    pub fn san(&self) -> &str {
        &self.san
    }

    pub fn piece(&self) -> PieceType {
        self.piece
    }

    /// Destination square. Castling moves have none.
    pub fn target(&self) -> Option<Square> {
        self.target
    }

    /// File written to tell apart two pieces that can reach the target, or the
    /// source file of a pawn capture.
    pub fn from_file(&self) -> Option<usize> {
        self.from_file
    }

    pub fn from_rank(&self) -> Option<usize> {
        self.from_rank
    }

    pub fn is_capture(&self) -> bool {
        self.capture
    }

    /// Also true for checkmates.
    pub fn is_check(&self) -> bool {
        self.check
    }

    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    pub fn is_castle(&self) -> bool {
        self.castle.is_some()
    }

    pub fn castle(&self) -> Option<CastleSide> {
        self.castle
    }

    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    pub fn promotion(&self) -> Option<PromotionPieces> {
        self.promotion
    }
}

impl FromStr for SanMove {
    type Err = NotationError;

    fn from_str(san: &str) -> Result<Self> {
        SanMove::try_from_str(san)
    }
}

impl fmt::Display for SanMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.san)
    }
}

pub fn classify(san: &str) -> Result<SanMove> {
    SanMove::try_from_str(san)
}
