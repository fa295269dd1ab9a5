//! Parser for plan files: direction names separated by whitespace, with
//! optional `;` or `#` line comments.

use crate::parsers::{ignore_single_line_comment, space_separated_list0, ParseResult, Span};
use crate::search::{Direction, Plan};
use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::multispace0,
    combinator::{map, value},
    sequence::{preceded, terminated},
};

pub fn parse_direction<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Direction> {
    alt((
        value(Direction::North, tag_no_case("north")),
        value(Direction::South, tag_no_case("south")),
        value(Direction::East, tag_no_case("east")),
        value(Direction::West, tag_no_case("west")),
    ))(input.into())
}

/// Parses a plan. Parsing stops at the first token that is not a direction;
/// callers decide whether leftover input is an error.
pub fn parse_plan<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Plan> {
    map(
        terminated(
            space_separated_list0(parse_direction),
            preceded(multispace0, ignore_single_line_comment),
        ),
        Plan::new,
    )(input.into())
}

impl crate::parsers::Parser for Plan {
    type Item = Plan;

    /// Parses a plan.
    ///
    /// ## See also
    /// See [`parse_plan`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_plan(input)
    }
}
