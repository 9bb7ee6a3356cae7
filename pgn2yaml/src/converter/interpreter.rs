use anyhow::{Context, Result};
use chessnote_gen::{
    board::{PieceType, Player, Square},
    fen::Position,
    pgn::GameRecord,
    san::{CastleSide, PromotionPieces, SanMove},
};
use std::collections::BTreeMap;

#[derive(PartialEq)]
pub enum MoveType {
    Normal,
    Capture,
    Promotion(PromotionPieces),
    PromotionWithCapture(PromotionPieces),
    KingsideCastling,
    QueensideCastling,
}

pub enum CheckType {
    Check,
    Checkmate,
}

pub struct DetailedMoveInfo {
    pub short: String,
    pub piece: PieceType,
    pub target: Option<Square>,
    pub move_type: MoveType,
    pub check_type: Option<CheckType>,
}

pub struct DetailedMove {
    pub number: u32,
    pub white: Option<DetailedMoveInfo>,
    pub black: Option<DetailedMoveInfo>,
}

#[derive(Default, Clone, Copy)]
pub enum GameEnding {
    #[default]
    Unfinished,
    Draw,
    WhiteWinsCheckmate,
    BlackWinsCheckmate,
    WhiteWins,
    BlackWins,
}

pub struct DetailedGame {
    pub id: String,
    pub tags: BTreeMap<String, String>,
    pub initial_position: Option<Position>,
    pub moves: Vec<DetailedMove>,
    pub ending: GameEnding,
}

fn detail_move(mv: &SanMove) -> DetailedMoveInfo {
    let check_type = if mv.is_checkmate() {
        Some(CheckType::Checkmate)
    } else if mv.is_check() {
        Some(CheckType::Check)
    } else {
        None
    };

    let move_type = match (mv.castle(), mv.promotion()) {
        (Some(CastleSide::Kingside), _) => MoveType::KingsideCastling,
        (Some(CastleSide::Queenside), _) => MoveType::QueensideCastling,
        (None, Some(piece)) if mv.is_capture() => MoveType::PromotionWithCapture(piece),
        (None, Some(piece)) => MoveType::Promotion(piece),
        (None, None) if mv.is_capture() => MoveType::Capture,
        (None, None) => MoveType::Normal,
    };

    DetailedMoveInfo {
        short: mv.san().to_string(),
        piece: mv.piece(),
        target: mv.target(),
        move_type,
        check_type,
    }
}

pub fn interpret(pgn: &GameRecord) -> Result<DetailedGame> {
    let initial_position = pgn
        .initial_position()
        .context("Invalid FEN tag")?;

    let (mut number, mut player) = initial_position
        .as_ref()
        .map_or((1, Player::White), |position| {
            (position.fullmove_number(), position.player())
        });

    let mut moves: Vec<DetailedMove> = Vec::new();
    let mut checkmate = false;

    for mv in pgn.san_moves().context("Cannot classify the moves")? {
        let info = detail_move(&mv);
        checkmate = mv.is_checkmate();

        match player {
            Player::White => moves.push(DetailedMove {
                number,
                white: Some(info),
                black: None,
            }),
            Player::Black => match moves.last_mut() {
                Some(last) if last.number == number && last.black.is_none() => {
                    last.black = Some(info)
                }
                _ => moves.push(DetailedMove {
                    number,
                    white: None,
                    black: Some(info),
                }),
            },
        }

        if player == Player::Black {
            number = number
                .checked_add(1)
                .context(format!("Move number {} is too large", number))?;
        }
        player = !player;
    }

    let ending = match pgn.result().or(pgn.headers().result.as_deref()) {
        Some("1-0") if checkmate => GameEnding::WhiteWinsCheckmate,
        Some("1-0") => GameEnding::WhiteWins,
        Some("0-1") if checkmate => GameEnding::BlackWinsCheckmate,
        Some("0-1") => GameEnding::BlackWins,
        Some("1/2-1/2") => GameEnding::Draw,
        _ => GameEnding::Unfinished,
    };

    Ok(DetailedGame {
        id: pgn.unique_id().to_string(),
        tags: pgn
            .tags()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
        initial_position,
        moves,
        ending,
    })
}
