#[cfg(test)]
mod tests;

use crate::board::{Piece, Player, Ranks, Square};
use crate::error::{FenField, NotationError, Result};

use log::trace;
use serde::Serialize;
use std::{fmt, str::FromStr};

pub const INITIAL_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CastlingRights {
    white_kingside: bool,
    white_queenside: bool,
    black_kingside: bool,
    black_queenside: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    fn try_from_fen(castling: &str) -> Option<Self> {
        let mut rights = CastlingRights::default();

        if castling == "-" {
            return Some(rights);
        }

        if castling.is_empty() {
            return None;
        }

        for right in castling.chars() {
            match right {
                'K' => rights.white_kingside = true,
                'Q' => rights.white_queenside = true,
                'k' => rights.black_kingside = true,
                'q' => rights.black_queenside = true,
                _ => return None,
            }
        }

        Some(rights)
    }

    pub fn can_castle_kingside(&self, player: &Player) -> bool {
        match player {
            Player::White => self.white_kingside,
            Player::Black => self.black_kingside,
        }
    }

    pub fn can_castle_queenside(&self, player: &Player) -> bool {
        match player {
            Player::White => self.white_queenside,
            Player::Black => self.black_queenside,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == CastlingRights::default()
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{white: {{kingside: {}, queenside: {}}}, black: {{kingside: {}, queenside: {}}}}}",
            self.white_kingside, self.white_queenside, self.black_kingside, self.black_queenside
        )
    }
}

/// A position decoded from a FEN record.
///
/// The board is stored as it is written: the first row is rank 8 and the last
/// one is rank 1, each row going from file `a` to file `h`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Position {
    #[serde(skip)]
    fen: String,
    board: Ranks<Option<Piece>>,
    player: Player,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

fn decode_board(pieces: &str) -> Option<Ranks<Option<Piece>>> {
    let mut board: Ranks<Option<Piece>> = Default::default();

    let rows = pieces.split('/').collect::<Vec<&str>>();

    if rows.len() != 8 {
        return None;
    }

    for (row, cells) in rows.iter().enumerate() {
        let mut file: usize = 0;
        for cell in cells.chars() {
            if let Some(skip) = cell.to_digit(10) {
                file += usize::try_from(skip).ok()?;
                if file > 8 {
                    return None;
                }
                continue;
            }

            if file > 7 {
                return None;
            }

            board[row][file] = Some(Piece::try_from_symbol(cell)?);
            file += 1;
        }

        if file != 8 {
            return None;
        }
    }

    Some(board)
}

// Digits only: no sign, no spaces
fn decode_counter(counter: &str) -> Option<u32> {
    if counter.is_empty() || !counter.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    counter.parse::<u32>().ok()
}

impl Position {
    pub fn try_from_fen(fen: &str) -> Result<Self> {
        // rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1
        // ^                                           ^ ^    ^ ^ ^
        // |                                           | |    | | ` Fullmove number
        // |                                           | |    | ` Halfmove clock
        // |                                           | |    ` En passant target square
        // |                                           | ` Castling availability
        // |                                           ` Active color
        // ` Pieces

        let fields = fen.split(' ').collect::<Vec<&str>>();

        let [pieces, player_str, castling, en_passant, halfmove, fullmove] = fields[..] else {
            return Err(NotationError::malformed_fen(FenField::Record, fen));
        };

        let board = decode_board(pieces)
            .ok_or_else(|| NotationError::malformed_fen(FenField::Pieces, pieces))?;

        let player = match player_str {
            "w" => Player::White,
            "b" => Player::Black,
            _ => return Err(NotationError::malformed_fen(FenField::ActiveColor, player_str)),
        };

        let castling = CastlingRights::try_from_fen(castling)
            .ok_or_else(|| NotationError::malformed_fen(FenField::Castling, castling))?;

        let en_passant = match en_passant {
            "-" => None,
            square_str => Some(
                Square::try_from_str(square_str)
                    .ok_or_else(|| NotationError::malformed_fen(FenField::EnPassant, square_str))?,
            ),
        };

        let halfmove_clock = decode_counter(halfmove)
            .ok_or_else(|| NotationError::malformed_fen(FenField::HalfmoveClock, halfmove))?;
        let fullmove_number = decode_counter(fullmove)
            .ok_or_else(|| NotationError::malformed_fen(FenField::FullmoveNumber, fullmove))?;

        trace!("decoded FEN {}", fen);

        Ok(Position {
            fen: fen.to_string(),
            board,
            player,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    pub fn fen(&self) -> &str {
        &self.fen
    }

    pub fn board(&self) -> &Ranks<Option<Piece>> {
        &self.board
    }

    pub fn at(&self, square: &Square) -> Option<Piece> {
        self.board[7 - square.rank][square.file]
    }

    /// Side to move.
    pub fn player(&self) -> Player {
        self.player
    }

    pub fn castling(&self) -> &CastlingRights {
        &self.castling
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }
}

impl Default for Position {
    fn default() -> Self {
        Position {
            fen: INITIAL_FEN.to_string(),
            board: [
                "rnbqkbnr", "pppppppp", "        ", "        ", "        ", "        ",
                "PPPPPPPP", "RNBQKBNR",
            ]
            .map(|row| {
                let mut cells: [Option<Piece>; 8] = Default::default();
                for (cell, symbol) in cells.iter_mut().zip(row.chars()) {
                    *cell = Piece::try_from_symbol(symbol);
                }
                cells
            }),
            player: Player::White,
            castling: CastlingRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(fen: &str) -> Result<Self> {
        Position::try_from_fen(fen)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.fen)
    }
}
