//! A `nom`-based parser for binding expressions.
//!
//! Grammar:
//!
//! ```text
//! expression := path ( '|' path )*
//! path       := segment ( '.' segment )*
//! segment    := [alphanumeric _ -]+
//! ```
use super::ast::{BindingExpr, BindingPath, PathSegment};
use crate::error::BindError;
use nom::{
    IResult, Parser,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::{map, map_opt},
    multi::separated_list1,
    sequence::delimited,
};

// --- Main Public Parser ---

pub fn parse_binding(input: &str) -> Result<BindingExpr, BindError> {
    match expression(input.trim()) {
        Ok(("", expr)) => Ok(expr),
        Ok((rem, _)) => Err(BindError::Parse {
            expression: input.to_string(),
            message: format!("Parser did not consume all input. Remainder: '{}'", rem),
        }),
        Err(e) => Err(BindError::Parse {
            expression: input.to_string(),
            message: e.to_string(),
        }),
    }
}

// --- Combinators ---

fn expression(input: &str) -> IResult<&str, BindingExpr> {
    map_opt(separated_list1(ws(char('|')), ws(path)), BindingExpr::new).parse(input)
}

fn path(input: &str) -> IResult<&str, BindingPath> {
    map_opt(separated_list1(char('.'), segment), BindingPath::new).parse(input)
}

fn segment(input: &str) -> IResult<&str, PathSegment> {
    map(
        take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-'),
        |s: &str| {
            if s.bytes().all(|b| b.is_ascii_digit()) {
                // Overlong digit runs fall back to a plain key.
                s.parse::<usize>()
                    .map(PathSegment::Index)
                    .unwrap_or_else(|_| PathSegment::Key(s.to_string()))
            } else {
                PathSegment::Key(s.to_string())
            }
        },
    )
    .parse(input)
}

/// A combinator that takes a parser `inner` and produces a parser that consumes surrounding whitespace.
fn ws<'a, F, O, E>(inner: F) -> impl Parser<&'a str, Output = O, Error = E>
where
    F: Parser<&'a str, Output = O, Error = E>,
    E: nom::error::ParseError<&'a str>,
{
    delimited(multispace0, inner, multispace0)
}
