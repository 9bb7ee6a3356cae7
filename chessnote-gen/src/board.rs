use serde::{Serialize, Serializer};
use std::{fmt, ops::Not};

pub const FILES: &str = "abcdefgh";
pub const RANKS: &str = "12345678";

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Pawn,   // p
    Knight, // n
    Bishop, // b
    Rook,   // r
    Queen,  // q
    King,   // k
}

impl PieceType {
    /// Piece letter as written in SAN: `K`, `Q`, `B`, `N` or `R`. Pawns have no letter.
    pub fn try_from_san_char(value: char) -> Option<Self> {
        match value {
            'K' => Some(PieceType::King),
            'Q' => Some(PieceType::Queen),
            'B' => Some(PieceType::Bishop),
            'N' => Some(PieceType::Knight),
            'R' => Some(PieceType::Rook),
            _ => None,
        }
    }

    fn letter(&self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match &self {
                PieceType::Pawn => "pawn",
                PieceType::Knight => "knight",
                PieceType::Bishop => "bishop",
                PieceType::Rook => "rook",
                PieceType::Queen => "queen",
                PieceType::King => "king",
            }
        )
    }
}

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    White,
    Black,
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match &self {
                Player::White => "white",
                Player::Black => "black",
            }
        )
    }
}

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Piece {
    pub piece: PieceType,
    pub player: Player,
}

impl Piece {
    /// FEN piece letter: upper case for white, lower case for black.
    pub fn try_from_symbol(symbol: char) -> Option<Self> {
        let piece = match symbol.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };
        let player = if symbol.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };

        Some(Piece { piece, player })
    }

    pub fn symbol(&self) -> char {
        let letter = self.piece.letter();
        match self.player {
            Player::White => letter.to_ascii_uppercase(),
            Player::Black => letter,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for Piece {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_char(self.symbol())
    }
}

pub(crate) fn try_file_from_char(value: char) -> Option<usize> {
    FILES.find(value)
}

pub(crate) fn try_rank_from_char(value: char) -> Option<usize> {
    RANKS.find(value)
}

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Square {
    pub rank: usize,
    pub file: usize,
}

impl Square {
    pub fn try_from_str(square_str: &str) -> Option<Square> {
        let mut chars = square_str.chars();
        let file = try_file_from_char(chars.next()?)?;
        let rank = try_rank_from_char(chars.next()?)?;

        if chars.next().is_some() {
            return None;
        }

        Some(Square { rank, file })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let row = self.rank + 1;
        let col = ["a", "b", "c", "d", "e", "f", "g", "h"][self.file];
        write!(f, "{}{}", col, row)
    }
}

impl Serialize for Square {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

pub type Files<T> = [T; 8];
pub type Ranks<T> = [Files<T>; 8];
