//! Parser for rescue-area layout text. Each line is one row of the map, the
//! first line being the northernmost row:
//!
//! ```text
//! %  wall            S  survivor         R  rescuer start
//! .  floor (cost 1)  ~  water (cost 2)   ^  rubble (cost 3)   *  fire (cost 5)
//! ```
//!
//! Every other character is plain floor.

use crate::parsers::{ParseResult, Span};
use crate::world::Terrain;
use nom::{
    bytes::complete::take_till,
    character::complete::line_ending,
    combinator::map,
    multi::separated_list0,
};

/// One cell of a layout exactly as written, before any coordinate handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutCell {
    Wall,
    Survivor,
    Rescuer,
    Ground(Terrain),
}

impl LayoutCell {
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            '%' => LayoutCell::Wall,
            'S' => LayoutCell::Survivor,
            'R' => LayoutCell::Rescuer,
            other => LayoutCell::Ground(Terrain::from_symbol(other)),
        }
    }
}

fn row_cells(row: Span) -> Vec<LayoutCell> {
    row.fragment()
        .trim_end()
        .chars()
        .map(LayoutCell::from_symbol)
        .collect()
}

/// Parses a single row up to (not including) the line ending. Trailing
/// whitespace is dropped.
pub fn parse_layout_row<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Vec<LayoutCell>> {
    map(take_till(|c| c == '\r' || c == '\n'), row_cells)(input.into())
}

/// Parses all rows of a layout, top row first. Empty lines are skipped; a
/// line of spaces is a row of floor.
pub fn parse_layout<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Vec<Vec<LayoutCell>>> {
    map(
        separated_list0(line_ending, take_till(|c| c == '\r' || c == '\n')),
        |lines: Vec<Span<'a>>| {
            lines
                .into_iter()
                .filter(|line| !line.fragment().is_empty())
                .map(row_cells)
                .collect()
        },
    )(input.into())
}
