use crate::parsers::{ParseResult, Span};
use nom::bytes::complete::is_not;
use nom::character::complete::{multispace0, one_of};
use nom::combinator::{opt, value};
use nom::sequence::{pair, terminated, tuple};

/// Skips any run of line comments, each starting with `;` or `#` and
/// running to the end of the line, together with the whitespace after them.
pub fn ignore_single_line_comment<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, ()> {
    value(
        (),
        opt(terminated(
            pair(one_of(";#"), opt(is_not("\r\n"))),
            tuple((multispace0, opt(ignore_single_line_comment))),
        )),
    )(input.into())
}
