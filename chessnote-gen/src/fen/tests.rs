use super::{CastlingRights, Position, INITIAL_FEN};
use crate::board::{Piece, PieceType, Player, Square};
use crate::error::{FenField, NotationError};

const VALID_FENS: [&str; 7] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
    "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2",
    "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2",
    "4k3/8/8/8/8/8/4P3/4K3 w - - 5 39",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
];

fn row_symbols(position: &Position, row: usize) -> String {
    position.board()[row]
        .iter()
        .map(|cell| cell.map_or(' ', |piece| piece.symbol()))
        .collect()
}

fn malformed_field(fen: &str) -> FenField {
    match Position::try_from_fen(fen) {
        Err(NotationError::MalformedFen { field, .. }) => field,
        Err(err) => panic!("unexpected error for {}: {}", fen, err),
        Ok(_) => panic!("{} should not decode", fen),
    }
}

#[test]
fn initial_position() {
    let position = Position::try_from_fen(INITIAL_FEN).unwrap();

    assert_eq!(row_symbols(&position, 0), "rnbqkbnr");
    assert_eq!(row_symbols(&position, 1), "pppppppp");
    for row in 2..6 {
        assert_eq!(row_symbols(&position, row), "        ");
    }
    assert_eq!(row_symbols(&position, 6), "PPPPPPPP");
    assert_eq!(row_symbols(&position, 7), "RNBQKBNR");

    assert_eq!(position.player(), Player::White);
    assert_eq!(*position.castling(), CastlingRights::ALL);
    assert_eq!(position.en_passant(), None);
    assert_eq!(position.halfmove_clock(), 0);
    assert_eq!(position.fullmove_number(), 1);

    assert_eq!(position, Position::default());
    assert_eq!(position.to_string(), INITIAL_FEN);
}

#[test]
fn square_lookup() {
    let position: Position = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        .parse()
        .unwrap();

    assert_eq!(
        position.at(&Square::try_from_str("e4").unwrap()),
        Some(Piece {
            piece: PieceType::Pawn,
            player: Player::White
        })
    );
    assert_eq!(position.at(&Square::try_from_str("e2").unwrap()), None);
    assert_eq!(
        position.at(&Square::try_from_str("d8").unwrap()),
        Some(Piece {
            piece: PieceType::Queen,
            player: Player::Black
        })
    );
    assert_eq!(position.player(), Player::Black);
    assert_eq!(position.en_passant(), Square::try_from_str("e3"));
}

#[test]
fn partial_castling_rights() {
    let position = Position::try_from_fen("4k3/8/8/8/8/8/4P3/4K3 w Kq - 5 39").unwrap();

    assert!(position.castling().can_castle_kingside(&Player::White));
    assert!(!position.castling().can_castle_queenside(&Player::White));
    assert!(!position.castling().can_castle_kingside(&Player::Black));
    assert!(position.castling().can_castle_queenside(&Player::Black));
    assert_eq!(position.halfmove_clock(), 5);
    assert_eq!(position.fullmove_number(), 39);

    let position = Position::try_from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 5 39").unwrap();
    assert!(position.castling().is_empty());
}

#[test]
fn wrong_field_count() {
    // Missing space between the active color and the castling rights
    assert_eq!(
        malformed_field("rnbqnr/pppppp/8/8/8/8/PPPPPPPP/RNBQKBNR wKQkq - 0 1"),
        FenField::Record
    );
    assert_eq!(
        malformed_field("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"),
        FenField::Record
    );
    assert_eq!(malformed_field(""), FenField::Record);
    assert_eq!(
        malformed_field("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra"),
        FenField::Record
    );
}

#[test]
fn malformed_fields() {
    assert_eq!(
        malformed_field("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1"),
        FenField::Pieces
    );
    assert_eq!(
        malformed_field("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
        FenField::Pieces
    );
    assert_eq!(
        malformed_field("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
        FenField::Pieces
    );
    assert_eq!(
        malformed_field("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
        FenField::Pieces
    );
    assert_eq!(
        malformed_field("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"),
        FenField::ActiveColor
    );
    assert_eq!(
        malformed_field("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1"),
        FenField::Castling
    );
    assert_eq!(
        malformed_field("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1"),
        FenField::EnPassant
    );
    assert_eq!(
        malformed_field("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1"),
        FenField::HalfmoveClock
    );
    assert_eq!(
        malformed_field("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 -1"),
        FenField::FullmoveNumber
    );
    assert_eq!(
        malformed_field("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - +5 1"),
        FenField::HalfmoveClock
    );
    assert_eq!(
        malformed_field("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 +1"),
        FenField::FullmoveNumber
    );
}

#[test]
fn error_carries_offending_field() {
    let err = Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - zero 1")
        .unwrap_err();

    assert_eq!(
        err,
        NotationError::MalformedFen {
            field: FenField::HalfmoveClock,
            value: "zero".to_string(),
        }
    );
}

#[test]
fn compare_against_shakmaty() {
    for fen in VALID_FENS {
        let position = Position::try_from_fen(fen)
            .unwrap_or_else(|err| panic!("Failed to parse FEN string {}: {}", fen, err));
        let shakmaty_fen = fen
            .parse::<shakmaty::fen::Fen>()
            .unwrap_or_else(|_| panic!("shakmaty rejected {}", fen));
        let setup = shakmaty_fen.as_setup();

        for rank in 0..8usize {
            for file in 0..8usize {
                let shakmaty_square = shakmaty::Square::from_coords(
                    shakmaty::File::new(file as u32),
                    shakmaty::Rank::new(rank as u32),
                );
                let expected = setup.board.piece_at(shakmaty_square).map(|piece| piece.char());
                let actual = position
                    .at(&Square { rank, file })
                    .map(|piece| piece.symbol());
                assert_eq!(actual, expected, "{} at {}", fen, Square { rank, file });
            }
        }

        assert_eq!(
            position.player() == Player::White,
            setup.turn == shakmaty::Color::White,
            "{}",
            fen
        );
        assert_eq!(position.halfmove_clock(), setup.halfmoves, "{}", fen);
        assert_eq!(position.fullmove_number(), setup.fullmoves.get(), "{}", fen);
    }
}
