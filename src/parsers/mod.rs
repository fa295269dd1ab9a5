//! nom parsers for the text formats the planner reads: rescue-area layouts
//! and plan files.

mod comments;
mod layout;
mod plan;
mod utilities;

pub trait Parser {
    type Item;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item>;

    /// Parse a string slice into the desired type. Discards any remaining
    /// input.
    fn from_str(input: &str) -> Result<Self::Item, nom::Err<ParseError>> {
        let (_, value) = Self::parse(input)?;
        Ok(value)
    }
}

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type ParseError<'a> = nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>;

pub type ParseResult<'a, T, E = ParseError<'a>> = nom::IResult<Span<'a>, T, E>;

pub use comments::ignore_single_line_comment;
pub use layout::{parse_layout, parse_layout_row, LayoutCell};
pub use plan::{parse_direction, parse_plan};
pub use utilities::{leading_whitespace, space_separated_list0};
