use crate::error::{NotationError, Result};

use nom::branch::alt;
use nom::bytes::complete::{is_a, is_not, tag, take_till};
use nom::character::complete::{char, digit1, not_line_ending};
use nom::combinator::{not, recognize};
use nom::multi::{many0, many1};
use nom::sequence::{delimited, pair, preceded, terminated};
use nom::IResult;

fn comment(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('{'), take_till(|c| c == '}'), char('}')),
        preceded(char(';'), not_line_ending),
    ))(input)
}

fn variation(input: &str) -> IResult<&str, &str> {
    recognize(delimited(
        char('('),
        many0(alt((variation, comment, is_not("(){};")))),
        char(')'),
    ))(input)
}

fn nag(input: &str) -> IResult<&str, &str> {
    recognize(pair(char('$'), digit1))(input)
}

fn move_number(input: &str) -> IResult<&str, &str> {
    recognize(pair(digit1, many1(char('.'))))(input)
}

// Continuation dots written apart from their number, as in `12. ... Nf6`
fn dots(input: &str) -> IResult<&str, &str> {
    recognize(many1(char('.')))(input)
}

// Informal evaluation symbols such as `+-`, `=` or `+/=`, as whole tokens
fn evaluation(input: &str) -> IResult<&str, &str> {
    terminated(is_a("+-=/"), not(san_move))(input)
}

fn result(input: &str) -> IResult<&str, &str> {
    alt((tag("1-0"), tag("0-1"), tag("1/2-1/2"), tag("*")))(input)
}

fn san_move(input: &str) -> IResult<&str, &str> {
    is_not(" \t\r\n{}();$")(input)
}

#[derive(Debug, Default, PartialEq)]
pub(crate) struct MoveList {
    pub moves: Vec<String>,
    pub result: Option<String>,
}

/// Extracts the mainline move tokens from the move text section of a game.
///
/// Move numbers (with any run of dots), comments, variations, NAGs,
/// evaluation symbols and `!`/`?` annotations are dropped. The result marker is kept apart from the moves.
pub(crate) fn mainline(movetext: &str) -> Result<MoveList> {
    let mut list = MoveList::default();
    let mut input = movetext;

    loop {
        input = input.trim_start();

        if input.is_empty() {
            break;
        }

        input = if let Ok((input, _)) = comment(input) {
            input
        } else if let Ok((input, _)) = variation(input) {
            input
        } else if let Ok((input, _)) = nag(input) {
            input
        } else if let Ok((input, result_str)) = result(input) {
            list.result = Some(result_str.to_string());
            input
        } else if let Ok((input, _)) = move_number(input) {
            input
        } else if let Ok((input, _)) = dots(input) {
            input
        } else if let Ok((input, _)) = evaluation(input) {
            input
        } else if let Ok((input, mv)) = san_move(input) {
            let mv = mv.trim_end_matches(|c| c == '!' || c == '?');
            if !mv.is_empty() {
                list.moves.push(mv.to_string());
            }
            input
        } else {
            return Err(NotationError::MalformedMoveText {
                near: input.chars().take(20).collect(),
            });
        };
    }

    Ok(list)
}
