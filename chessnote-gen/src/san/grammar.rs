use super::{CastleSide, PromotionPieces};
use crate::board::{try_file_from_char, try_rank_from_char, PieceType, Square, FILES, RANKS};

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, one_of};
use nom::combinator::{eof, map, map_opt, opt, success, value};
use nom::sequence::{pair, preceded, terminated, tuple};
use nom::IResult;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(super) enum CheckSuffix {
    Check,
    Checkmate,
}

/// Everything the grammar recognizes in a token, before it becomes a `SanMove`.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct SanParts {
    pub piece: PieceType,
    pub from_file: Option<usize>,
    pub from_rank: Option<usize>,
    pub capture: bool,
    pub target: Option<Square>,
    pub promotion: Option<PromotionPieces>,
    pub castle: Option<CastleSide>,
}

fn file(input: &str) -> IResult<&str, usize> {
    map_opt(one_of(FILES), try_file_from_char)(input)
}

fn rank(input: &str) -> IResult<&str, usize> {
    map_opt(one_of(RANKS), try_rank_from_char)(input)
}

fn square(input: &str) -> IResult<&str, Square> {
    map(pair(file, rank), |(file, rank)| Square { rank, file })(input)
}

fn capture(input: &str) -> IResult<&str, bool> {
    map(opt(char('x')), |x| x.is_some())(input)
}

fn piece_letter(input: &str) -> IResult<&str, PieceType> {
    map_opt(one_of("KQBNR"), PieceType::try_from_san_char)(input)
}

fn promotion(input: &str) -> IResult<&str, PromotionPieces> {
    preceded(
        char('='),
        map_opt(one_of("QBNR"), PromotionPieces::try_from_char),
    )(input)
}

fn check_suffix(input: &str) -> IResult<&str, CheckSuffix> {
    alt((
        value(CheckSuffix::Checkmate, char('#')),
        value(CheckSuffix::Check, char('+')),
    ))(input)
}

// Each alternative must reach the end of the token on its own, otherwise a
// shorter alternative matching a prefix would hide a longer one.
fn complete<'a, F>(
    parser: F,
) -> impl FnMut(&'a str) -> IResult<&'a str, (SanParts, Option<CheckSuffix>)>
where
    F: FnMut(&'a str) -> IResult<&'a str, SanParts>,
{
    terminated(pair(parser, opt(check_suffix)), eof)
}

fn pawn_move(input: &str) -> IResult<&str, SanParts> {
    let (input, source_file) = file(input)?;
    let (input, (capture, target)) = alt((
        map(preceded(char('x'), square), |target| (true, target)),
        map(rank, |rank| {
            (
                false,
                Square {
                    rank,
                    file: source_file,
                },
            )
        }),
    ))(input)?;
    let (input, promotion) = opt(promotion)(input)?;

    Ok((
        input,
        SanParts {
            piece: PieceType::Pawn,
            from_file: if capture { Some(source_file) } else { None },
            from_rank: None,
            capture,
            target: Some(target),
            promotion,
            castle: None,
        },
    ))
}

type Disambiguation = (Option<usize>, Option<usize>);

fn piece_move<'a, D>(disambiguation: D) -> impl FnMut(&'a str) -> IResult<&'a str, SanParts>
where
    D: FnMut(&'a str) -> IResult<&'a str, Disambiguation>,
{
    map(
        tuple((piece_letter, disambiguation, capture, square)),
        |(piece, (from_file, from_rank), capture, target)| SanParts {
            piece,
            from_file,
            from_rank,
            capture,
            target: Some(target),
            promotion: None,
            castle: None,
        },
    )
}

fn from_square(input: &str) -> IResult<&str, Disambiguation> {
    map(pair(file, rank), |(file, rank)| (Some(file), Some(rank)))(input)
}

fn from_file(input: &str) -> IResult<&str, Disambiguation> {
    map(file, |file| (Some(file), None))(input)
}

fn from_rank(input: &str) -> IResult<&str, Disambiguation> {
    map(rank, |rank| (None, Some(rank)))(input)
}

fn castle(input: &str) -> IResult<&str, SanParts> {
    map(
        alt((
            value(CastleSide::Queenside, tag("O-O-O")),
            value(CastleSide::Kingside, tag("O-O")),
        )),
        |side| SanParts {
            piece: PieceType::King,
            from_file: None,
            from_rank: None,
            capture: false,
            target: None,
            promotion: None,
            castle: Some(side),
        },
    )(input)
}

/// Matches a whole SAN token.
pub(super) fn san(input: &str) -> IResult<&str, (SanParts, Option<CheckSuffix>)> {
    alt((
        complete(pawn_move),
        complete(piece_move(from_square)),
        complete(piece_move(from_file)),
        complete(piece_move(from_rank)),
        complete(piece_move(success((None, None)))),
        complete(castle),
    ))(input)
}
